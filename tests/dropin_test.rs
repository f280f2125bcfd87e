use dropin::operation::OperationRunner;
use dropin::runner::execute;
use std::fs;
use tempfile::TempDir;
use test_log::test;

mod utils;
use utils::*;

#[test]
fn test_generates_expected_project() {
    let workspace = TempDir::new().unwrap();
    let source = copy_fixture(&workspace.path().join("apptemplate"));
    write(&source, "node_modules/left-pad/index.js", "module.exports = 1;\n");
    write(&source, ".git/HEAD", "ref: refs/heads/main\n");
    let target = workspace.path().join("bookstore");

    let context = bookstore_context(&source, &target);
    let mut runner = OperationRunner::new(false);
    execute(&context, &mut runner).unwrap();

    assert!(!dir_diff::is_different(&target, EXPECTED).unwrap());
}

#[test]
fn test_leaves_no_template_tokens_when_entity_excluded() {
    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("bookstore");

    let context = bookstore_context(std::path::Path::new(FIXTURE), &target);
    execute(&context, &mut OperationRunner::new(false)).unwrap();

    let files = list_files(&target);
    for expected in [
        "protos/bookstore/v1/books.proto",
        "protos/bookstore/v1/libraries.proto",
        "services/books_service.go",
        "services/libraries_service.go",
    ] {
        assert!(files.contains(&expected.to_string()), "missing {expected}");
    }
    assert!(files_containing(&target, "AppItem").is_empty());
    assert!(files_containing(&target, "apptemplate").is_empty());
}

#[test]
fn test_keeps_template_entity_without_exclusion() {
    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("bookstore");

    let mut context = bookstore_context(std::path::Path::new(FIXTURE), &target);
    context.exclude_template_entity = false;
    execute(&context, &mut OperationRunner::new(false)).unwrap();

    let files = list_files(&target);
    assert!(files.contains(&"services/appitems_service.go".to_string()));
    assert!(files.contains(&"services/books_service.go".to_string()));
    assert!(files.contains(&"protos/bookstore/v1/appitems.proto".to_string()));

    let service = fs::read_to_string(target.join("services/appitems_service.go")).unwrap();
    assert!(service.contains("github.com/alice/bookstore/gen/go/bookstore/v1"));
    assert!(service.contains("AppItemsServiceImpl"));

    let models = fs::read_to_string(target.join("protos/bookstore/v1/models.proto")).unwrap();
    assert!(models.contains("message AppItem {"));
}

#[test]
fn test_dry_run_touches_nothing() {
    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("bookstore");

    let mut context = bookstore_context(std::path::Path::new(FIXTURE), &target);
    context.dry_run = true;
    context.skip_codegen = false;
    let mut runner = OperationRunner::new(true);
    execute(&context, &mut runner).unwrap();

    assert!(!target.exists());
    assert!(fs::read_dir(workspace.path()).unwrap().next().is_none());

    let messages = runner.messages();
    assert!(messages.iter().all(|m| m.starts_with("[DRY RUN]")));
    assert!(messages.iter().any(|m| m.contains("services/books_service.go")));
    assert!(messages.iter().any(|m| m.contains("libraries.proto")));
    assert!(messages.iter().any(|m| m.ends_with("Would run: buf generate")));
    assert!(messages.iter().any(|m| m.ends_with("Would run: make build-frontend")));
}

#[test]
fn test_dry_run_leaves_existing_target_untouched() {
    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("bookstore");
    write(&target, "go.mod", "module github.com/panyam/apptemplate\n");

    let mut context = bookstore_context(std::path::Path::new(FIXTURE), &target);
    context.dry_run = true;
    let mut runner = OperationRunner::new(true);
    execute(&context, &mut runner).unwrap();

    assert_eq!(list_files(&target), vec!["go.mod"]);
    assert_eq!(
        fs::read_to_string(target.join("go.mod")).unwrap(),
        "module github.com/panyam/apptemplate\n"
    );
    assert!(!workspace.path().join("bookstore.backup").exists());
    assert!(runner.messages().iter().any(|m| m.contains("Would create backup")));
    assert!(runner.messages().iter().any(|m| m.contains("go.mod")));
}

#[test]
fn test_backs_up_existing_target() {
    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("bookstore");
    write(&target, "notes/todo.txt", "keep me\n");

    let context = bookstore_context(std::path::Path::new(FIXTURE), &target);
    execute(&context, &mut OperationRunner::new(false)).unwrap();

    let backup = workspace.path().join("bookstore.backup");
    assert_eq!(list_files(&backup), vec!["notes/todo.txt"]);
    assert!(target.join("notes/todo.txt").exists());
    assert!(target.join("services/books_service.go").exists());
}

#[test]
fn test_rerun_is_stable() {
    let workspace = TempDir::new().unwrap();
    let target = workspace.path().join("bookstore");
    let context = bookstore_context(std::path::Path::new(FIXTURE), &target);

    execute(&context, &mut OperationRunner::new(false)).unwrap();
    execute(&context, &mut OperationRunner::new(false)).unwrap();

    assert!(!dir_diff::is_different(&target, EXPECTED).unwrap());
    assert!(!dir_diff::is_different(workspace.path().join("bookstore.backup"), EXPECTED).unwrap());
}

#[test]
fn test_missing_source_is_fatal() {
    let workspace = TempDir::new().unwrap();
    let context = bookstore_context(&workspace.path().join("missing"), &workspace.path().join("out"));
    assert!(execute(&context, &mut OperationRunner::new(false)).is_err());
}

#[test]
fn test_target_inside_source_is_not_copied_into_itself() {
    let workspace = TempDir::new().unwrap();
    let source = copy_fixture(&workspace.path().join("apptemplate"));
    let target = source.join("bookstore");

    let context = bookstore_context(&source, &target);
    execute(&context, &mut OperationRunner::new(false)).unwrap();
    execute(&context, &mut OperationRunner::new(false)).unwrap();

    let files = list_files(&target);
    assert!(files.contains(&"README.md".to_string()));
    assert!(files.contains(&"services/books_service.go".to_string()));
    assert!(!target.join("bookstore").exists());
    assert!(!target.join("bookstore.backup").exists());
    assert!(source.join("bookstore.backup").is_dir());
}
