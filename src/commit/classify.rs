//! Ordered rule tables that turn a path plus its content (or diff) into a
//! short description.
//!
//! Each table is a list of `(Predicate, Label)` rules evaluated top to bottom;
//! the first rule whose predicate holds supplies the label.

use std::path::Path;
use std::sync::LazyLock;

use regex_lite::Regex;

use FamilyTag as F;
use Predicate as P;

/// `export default function Foo` / `export default class Foo` (optionally async).
static EXPORT_DEFAULT_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"export\s+default\s+(?:async\s+)?(?:function|class)\b")
        .expect("Invalid regex")
});

/// Broad grouping of a file by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFamily {
    /// UI component source; carries the framework name.
    Component(&'static str),
    /// General script source; carries the language name.
    Script(&'static str),
    Stylesheet,
    Data,
    Documentation,
    Other,
}

impl FileFamily {
    pub fn from_path(path: &str) -> Self {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "tsx" | "jsx" => FileFamily::Component("React"),
            "vue" => FileFamily::Component("Vue"),
            "svelte" => FileFamily::Component("Svelte"),
            "ts" | "mts" | "cts" => FileFamily::Script("TypeScript"),
            "js" | "mjs" | "cjs" => FileFamily::Script("JavaScript"),
            "css" | "scss" | "sass" | "less" => FileFamily::Stylesheet,
            "json" | "yaml" | "yml" | "toml" => FileFamily::Data,
            "md" | "mdx" | "rst" | "txt" => FileFamily::Documentation,
            _ => FileFamily::Other,
        }
    }

    /// Framework or language name, if the family has one.
    pub fn kind(&self) -> Option<&'static str> {
        match *self {
            FileFamily::Component(kind) | FileFamily::Script(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Coarse family tag used by predicates (ignores the kind payload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyTag {
    Component,
    Script,
    Stylesheet,
    Data,
    Documentation,
}

impl FamilyTag {
    fn matches(self, family: FileFamily) -> bool {
        matches!(
            (self, family),
            (FamilyTag::Component, FileFamily::Component(_))
                | (FamilyTag::Script, FileFamily::Script(_))
                | (FamilyTag::Stylesheet, FileFamily::Stylesheet)
                | (FamilyTag::Data, FileFamily::Data)
                | (FamilyTag::Documentation, FileFamily::Documentation)
        )
    }
}

/// Everything a rule may inspect about one file.
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    pub path: &'a str,
    pub family: FileFamily,
    /// File content for added files, diff text for modified files.
    pub text: &'a str,
}

impl<'a> FileContext<'a> {
    pub fn new(path: &'a str, text: &'a str) -> Self {
        Self {
            path,
            family: FileFamily::from_path(path),
            text,
        }
    }

    /// File name without directory or extension.
    fn stem(&self) -> &'a str {
        Path::new(self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.path)
    }
}

/// Condition over a [`FileContext`].
#[derive(Debug)]
pub enum Predicate {
    Always,
    Family(FamilyTag),
    PathContains(&'static str),
    TextContains(&'static str),
    ExportDefaultDecl,
    All(&'static [Predicate]),
    Any(&'static [Predicate]),
}

impl Predicate {
    pub fn matches(&self, ctx: &FileContext<'_>) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Family(tag) => tag.matches(ctx.family),
            Predicate::PathContains(needle) => ctx.path.contains(needle),
            Predicate::TextContains(needle) => ctx.text.contains(needle),
            Predicate::ExportDefaultDecl => EXPORT_DEFAULT_DECL.is_match(ctx.text),
            Predicate::All(preds) => preds.iter().all(|p| p.matches(ctx)),
            Predicate::Any(preds) => preds.iter().any(|p| p.matches(ctx)),
        }
    }
}

/// Description produced by a matching rule.
#[derive(Debug)]
pub enum Label {
    Fixed(&'static str),
    /// `new <kind> component: <stem>`
    NamedComponent,
    /// `new <kind> component`
    NewComponent,
    /// `new <kind> file`
    NewKindFile,
    /// `update <kind> component`
    UpdateComponent,
}

impl Label {
    pub fn render(&self, ctx: &FileContext<'_>) -> String {
        let kind = ctx.family.kind().unwrap_or("source");
        match self {
            Label::Fixed(text) => (*text).to_string(),
            Label::NamedComponent => format!("new {} component: {}", kind, ctx.stem()),
            Label::NewComponent => format!("new {} component", kind),
            Label::NewKindFile => format!("new {} file", kind),
            Label::UpdateComponent => format!("update {} component", kind),
        }
    }
}

/// One `(Predicate, Label)` pair.
#[derive(Debug)]
pub struct Rule {
    pub when: Predicate,
    pub label: Label,
}

const fn rule(when: Predicate, label: Label) -> Rule {
    Rule { when, label }
}

/// Rules for newly added files, evaluated against file content.
pub static ADDED_RULES: &[Rule] = &[
    rule(
        P::All(&[P::Family(F::Component), P::ExportDefaultDecl]),
        Label::NamedComponent,
    ),
    rule(P::Family(F::Component), Label::NewComponent),
    rule(
        P::All(&[P::Family(F::Script), P::PathContains("config")]),
        Label::Fixed("new configuration file"),
    ),
    rule(
        P::All(&[P::Family(F::Script), P::PathContains("script")]),
        Label::Fixed("new utility script"),
    ),
    rule(P::Family(F::Script), Label::NewKindFile),
    rule(P::Family(F::Stylesheet), Label::Fixed("new stylesheet")),
    rule(P::Family(F::Data), Label::Fixed("new configuration")),
    rule(P::Family(F::Documentation), Label::Fixed("new documentation")),
    rule(P::Always, Label::Fixed("new file")),
];

/// Rules for modified files, evaluated against the diff text.
pub static MODIFIED_RULES: &[Rule] = &[
    rule(
        P::All(&[
            P::Family(F::Component),
            P::Any(&[
                P::TextContains("className"),
                P::TextContains("style="),
                P::TextContains("styled."),
            ]),
        ]),
        Label::Fixed("update component styling"),
    ),
    rule(
        P::All(&[P::Family(F::Component), P::TextContains("import ")]),
        Label::Fixed("update component imports"),
    ),
    rule(
        P::All(&[P::Family(F::Component), P::TextContains("export default")]),
        Label::Fixed("update component structure"),
    ),
    rule(
        P::All(&[
            P::Family(F::Component),
            P::Any(&[P::TextContains("//"), P::TextContains("/*")]),
        ]),
        Label::Fixed("update component comments"),
    ),
    rule(P::Family(F::Component), Label::UpdateComponent),
    rule(
        P::All(&[
            P::Family(F::Data),
            P::Any(&[
                P::TextContains("dependencies"),
                P::TextContains("Dependencies"),
            ]),
        ]),
        Label::Fixed("update dependencies"),
    ),
    rule(
        P::All(&[P::Family(F::Data), P::TextContains("scripts")]),
        Label::Fixed("update npm scripts"),
    ),
    rule(P::Family(F::Data), Label::Fixed("update configuration")),
    rule(P::Family(F::Stylesheet), Label::Fixed("update styles")),
    rule(P::Family(F::Documentation), Label::Fixed("update documentation")),
    rule(P::Family(F::Script), Label::Fixed("update code logic")),
    rule(P::Always, Label::Fixed("update file content")),
];

/// Apply the first matching rule. Tables end in `Always`, so `None` only
/// happens for a table without a catch-all.
pub fn classify(rules: &[Rule], ctx: &FileContext<'_>) -> Option<String> {
    rules
        .iter()
        .find(|r| r.when.matches(ctx))
        .map(|r| r.label.render(ctx))
}
