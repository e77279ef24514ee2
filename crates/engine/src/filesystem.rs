use crate::config::WalkOptions;
use crossbeam_channel::Sender;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};

/// Item sent by the walker: a regular file, or an entry that could not be read.
pub type WalkItem = std::result::Result<PathBuf, ignore::Error>;

/// Parallel recursive directory walk.
///
/// Every regular file below the roots, and every symlink to one, is sent to
/// `tx`. With `options.git_ignore` off, no ignore file of any kind applies.
/// Directories whose name starts with `.` are pruned unless `options.hidden`
/// is set; files are never filtered by name. Unreadable entries are sent as
/// errors and the walk continues.
pub fn walk_parallel(options: &WalkOptions, tx: &Sender<WalkItem>) {
    let Some((first, rest)) = options.roots.split_first() else {
        return;
    };

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(false)
        .git_ignore(options.git_ignore)
        .git_exclude(options.git_ignore)
        .git_global(options.git_ignore)
        .ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let include_hidden = options.hidden;
    builder.filter_entry(move |entry| include_hidden || !is_hidden_dir(entry));

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            let item = match entry {
                Ok(entry) if is_file(&entry) => Ok(entry.into_path()),
                Ok(_) => return ignore::WalkState::Continue,
                Err(err) => {
                    log::warn!("walk error: {err}");
                    Err(err)
                }
            };
            if tx.send(item).is_err() {
                // Receiver is gone; nothing left to do.
                return ignore::WalkState::Quit;
            }
            ignore::WalkState::Continue
        })
    });
}

// シンボリックリンクはリンク先がファイルなら対象
fn is_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| {
        ft.is_file() || (ft.is_symlink() && entry.path().is_file())
    })
}

/// Path an `ignore::Error` refers to, if it carries one.
#[must_use]
pub fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}

// Roots (depth 0) are always walked, even `.` itself.
fn is_hidden_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && entry.file_name().to_string_lossy().starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn collect(options: &WalkOptions) -> Vec<PathBuf> {
        let (tx, rx) = crossbeam_channel::unbounded();
        walk_parallel(options, &tx);
        drop(tx);
        let mut paths: Vec<PathBuf> = rx.into_iter().filter_map(Result::ok).collect();
        paths.sort();
        paths
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "fn x() {}\n").unwrap();
        fs::write(dir.path().join(".hidden/secret.txt"), "s\n").unwrap();
        fs::write(dir.path().join(".dotfile"), "d\n").unwrap();
        dir
    }

    #[test]
    fn prunes_hidden_directories_but_keeps_dotfiles() {
        let dir = fixture();
        let options = WalkOptions {
            roots: vec![dir.path().to_path_buf()],
            git_ignore: false,
            ..WalkOptions::default()
        };

        let paths = collect(&options);
        assert_eq!(paths, vec![dir.path().join(".dotfile"), dir.path().join("src/lib.rs")]);
    }

    #[test]
    fn hidden_flag_includes_hidden_directories() {
        let dir = fixture();
        let options = WalkOptions {
            roots: vec![dir.path().to_path_buf()],
            hidden: true,
            git_ignore: false,
            ..WalkOptions::default()
        };

        assert!(collect(&options).contains(&dir.path().join(".hidden/secret.txt")));
    }

    #[test]
    fn no_gitignore_disables_every_ignore_source() {
        let dir = fixture();
        fs::write(dir.path().join(".ignore"), "src/\n").unwrap();

        let respecting = WalkOptions {
            roots: vec![dir.path().to_path_buf()],
            ..WalkOptions::default()
        };
        assert!(!collect(&respecting).contains(&dir.path().join("src/lib.rs")));

        let everything = WalkOptions {
            git_ignore: false,
            ..respecting
        };
        assert!(collect(&everything).contains(&dir.path().join("src/lib.rs")));
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_file_is_yielded_without_follow() {
        let dir = fixture();
        let link = dir.path().join("link.rs");
        std::os::unix::fs::symlink(dir.path().join("src/lib.rs"), &link).unwrap();
        std::os::unix::fs::symlink(dir.path().join("src"), dir.path().join("link_dir")).unwrap();

        let options = WalkOptions {
            roots: vec![dir.path().to_path_buf()],
            git_ignore: false,
            ..WalkOptions::default()
        };
        let paths = collect(&options);

        assert!(paths.contains(&link));
        assert!(!paths.iter().any(|p| p.starts_with(dir.path().join("link_dir"))));
    }

    #[test]
    fn file_root_is_yielded() {
        let dir = fixture();
        let file = dir.path().join("src/lib.rs");
        let options = WalkOptions {
            roots: vec![file.clone()],
            ..WalkOptions::default()
        };

        assert_eq!(collect(&options), vec![file]);
    }

    #[test]
    fn missing_root_is_reported() {
        let dir = fixture();
        let (tx, rx) = crossbeam_channel::unbounded();
        let options = WalkOptions {
            roots: vec![dir.path().join("nope")],
            ..WalkOptions::default()
        };
        walk_parallel(&options, &tx);
        drop(tx);

        let missing = dir.path().join("nope");
        let errors: Vec<_> = rx.into_iter().filter_map(Result::err).collect();
        assert!(!errors.is_empty());
        assert!(errors.iter().any(|e| error_path(e) == Some(missing.as_path())));
    }
}
