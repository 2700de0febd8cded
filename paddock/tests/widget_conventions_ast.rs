use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

#[test]
fn given_components_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let components_dir = manifest_dir.join("src/components");
    let mod_rs = components_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod)
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() =>
            {
                declared_modules.insert(item_mod.ident.to_string());
            },
            Item::Mod(item_mod) => violations.push(format!(
                "{}: module declaration '{}' must be pub(crate) mod <name>;",
                mod_rs.display(),
                item_mod.ident
            )),
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let fs_modules = rust_file_stems(&components_dir, &mut violations);
    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match file modules {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        let file_path = components_dir.join(format!("{module}.rs"));
        validate_component_file(&file_path, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "component convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_widgets_when_validating_layering_then_no_widget_sees_app_events() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");

    let mut violations: Vec<String> = Vec::new();
    let mut files = Vec::new();
    collect_rust_files(&widgets_dir, &mut files);

    for file_path in files {
        let source = read(&file_path);
        for forbidden in ["crate::app::", "AppEvent", "crate::routers::"] {
            if source.contains(forbidden) {
                violations.push(format!(
                    "{}: widgets must not depend on app wiring: {forbidden}",
                    file_path.display()
                ));
            }
        }

        let is_view = file_path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|name| name == "view");
        if is_view {
            for forbidden in ["log::", "Task::", "iced::Task", "Instant::now"]
            {
                if source.contains(forbidden) {
                    violations.push(format!(
                        "{}: forbidden side-effect pattern in view: {forbidden}",
                        file_path.display()
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "widget layering violations:\n{}",
        violations.join("\n")
    );
}

fn validate_component_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);

    for forbidden in ["crate::app::", "crate::widgets::", "crate::routers::"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: components must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in [
        "log::",
        "std::fs::",
        "tokio::spawn",
        "Task::",
        "iced::Task",
        "Instant::now",
        "Utc::now",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    let mut event_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") {
                    event_names.push(name);
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }
    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }
    if event_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Event contract, found {}",
            file_path.display(),
            event_names.len()
        ));
    }

    for name in props_names.iter().chain(&event_names) {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: '{name}' must start with file prefix '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()))
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

/// Stems of the `.rs` files directly in `dir`, excluding `mod.rs`.
fn rust_file_stems(dir: &Path, violations: &mut Vec<String>) -> BTreeSet<String> {
    let mut stems = BTreeSet::new();
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();
        if path.is_dir() {
            violations.push(format!(
                "{}: nested component directories are forbidden",
                path.display()
            ));
            continue;
        }
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let Some(stem) = path.file_stem() else {
            continue;
        };
        if stem != "mod" {
            stems.insert(stem.to_string_lossy().to_string());
        }
    }
    stems
}

fn collect_rust_files(dir: &Path, files: &mut Vec<PathBuf>) {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    for entry in entries {
        let path = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
            .path();
        if path.is_dir() {
            collect_rust_files(&path, files);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();
    stem.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
