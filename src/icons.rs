//! Nerd Font icons for files and directories.

/// A glyph and the 256-color palette index it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: &'static str,
    pub color: u8,
}

const DEFAULT_FILE_ICON: Icon = Icon {
    glyph: "\u{f15b}",
    color: 245,
};
const DEFAULT_DIRECTORY_ICON: Icon = Icon {
    glyph: "\u{f07b}",
    color: 245,
};
const SUBMODULE_ICON: Icon = Icon {
    glyph: "\u{f1d3}",
    color: 202,
};
const LINKED_WORKTREE_ICON: Icon = Icon {
    glyph: "\u{f1bb}",
    color: 245,
};

/// Icons keyed by exact file name, checked before extensions.
const NAME_ICONS: &[(&str, Icon)] = &[
    (".gitignore", Icon { glyph: "\u{f1d3}", color: 202 }),
    (".gitmodules", Icon { glyph: "\u{f1d3}", color: 202 }),
    ("Cargo.lock", Icon { glyph: "\u{e7a8}", color: 173 }),
    ("Cargo.toml", Icon { glyph: "\u{e7a8}", color: 173 }),
    ("Dockerfile", Icon { glyph: "\u{f308}", color: 32 }),
    ("LICENSE", Icon { glyph: "\u{f0219}", color: 185 }),
    ("Makefile", Icon { glyph: "\u{e779}", color: 66 }),
    ("go.mod", Icon { glyph: "\u{e627}", color: 74 }),
    ("go.sum", Icon { glyph: "\u{e627}", color: 74 }),
    ("package.json", Icon { glyph: "\u{e71e}", color: 197 }),
];

/// Icons keyed by lowercase extension.
const EXTENSION_ICONS: &[(&str, Icon)] = &[
    ("c", Icon { glyph: "\u{e61e}", color: 111 }),
    ("cpp", Icon { glyph: "\u{e61d}", color: 26 }),
    ("css", Icon { glyph: "\u{e749}", color: 75 }),
    ("go", Icon { glyph: "\u{e627}", color: 74 }),
    ("h", Icon { glyph: "\u{f0fd}", color: 140 }),
    ("html", Icon { glyph: "\u{e736}", color: 196 }),
    ("java", Icon { glyph: "\u{e738}", color: 167 }),
    ("js", Icon { glyph: "\u{e74e}", color: 185 }),
    ("json", Icon { glyph: "\u{e60b}", color: 185 }),
    ("lock", Icon { glyph: "\u{f023}", color: 250 }),
    ("lua", Icon { glyph: "\u{e620}", color: 74 }),
    ("md", Icon { glyph: "\u{f48a}", color: 67 }),
    ("py", Icon { glyph: "\u{e606}", color: 214 }),
    ("rb", Icon { glyph: "\u{e791}", color: 52 }),
    ("rs", Icon { glyph: "\u{e7a8}", color: 173 }),
    ("sh", Icon { glyph: "\u{f489}", color: 113 }),
    ("sql", Icon { glyph: "\u{f1c0}", color: 188 }),
    ("toml", Icon { glyph: "\u{e6b2}", color: 124 }),
    ("ts", Icon { glyph: "\u{e628}", color: 74 }),
    ("txt", Icon { glyph: "\u{f15c}", color: 113 }),
    ("yaml", Icon { glyph: "\u{e6a8}", color: 168 }),
    ("yml", Icon { glyph: "\u{e6a8}", color: 168 }),
];

/// Picks the icon for a row. `name` may be a multi-segment path or a rename
/// annotation; only its final component is inspected.
pub fn icon_for_file(
    name: &str,
    is_submodule: bool,
    is_linked_worktree: bool,
    is_directory: bool,
) -> Icon {
    if is_submodule {
        return SUBMODULE_ICON;
    }
    if is_linked_worktree {
        return LINKED_WORKTREE_ICON;
    }
    if is_directory {
        return DEFAULT_DIRECTORY_ICON;
    }

    let base = name.rsplit('/').next().unwrap_or(name);
    if let Some((_, icon)) = NAME_ICONS.iter().find(|(file_name, _)| *file_name == base) {
        return *icon;
    }

    base.rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .and_then(|ext| {
            EXTENSION_ICONS
                .iter()
                .find(|(known, _)| *known == ext)
                .map(|(_, icon)| *icon)
        })
        .unwrap_or(DEFAULT_FILE_ICON)
}
