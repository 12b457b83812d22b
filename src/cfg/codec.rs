//! Conversion between [`Cfg`] and the TLC configuration syntax.
//!
//! Parsing is line oriented. Every trimmed line is offered to an ordered table
//! of rules and the first rule whose pattern matches handles it; lines that no
//! rule claims (blank lines, `CONSTANTS` headers, anything else) are ignored.
//! Only text shaped like [`format`] output is guaranteed to survive a
//! parse/format cycle unchanged.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::Cfg;

/// Header introducing the model value assignments.
pub const MODEL_VALUES_HEADER: &str = r"CONSTANTS \* model values";
/// Header introducing the ordinary constant assignments.
pub const CONSTANTS_HEADER: &str = r"CONSTANTS \* regular assignments";

type Handler = fn(&mut Cfg, &Captures<'_>);

struct LineRule {
    pattern: Regex,
    apply: Handler,
}

impl LineRule {
    #[expect(
        clippy::expect_used,
        reason = "rule patterns are literals; an invalid one is a programming error"
    )]
    fn new(pattern: &str, apply: Handler) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("line rule pattern must compile"),
            apply,
        }
    }

    fn try_apply(&self, cfg: &mut Cfg, line: &str) -> bool {
        let Some(caps) = self.pattern.captures(line) else {
            return false;
        };
        (self.apply)(cfg, &caps);
        true
    }
}

// Keyword rules come first: the assignment rule is a loose heuristic and only
// sees lines that none of them claimed.
static RULES: LazyLock<[LineRule; 4]> = LazyLock::new(|| {
    [
        LineRule::new(r"^SPECIFICATION (\w+)", |cfg, caps| {
            cfg.spec = Some(capture(caps, 1).to_owned());
        }),
        LineRule::new(r"^INVARIANT (\w+)", |cfg, caps| {
            cfg.invariants.insert(capture(caps, 1).to_owned());
        }),
        LineRule::new(r"^PROPERTY (\w+)", |cfg, caps| {
            cfg.properties.insert(capture(caps, 1).to_owned());
        }),
        // Values containing `=` are split at a best guess; this is accepted.
        LineRule::new(r"^(\S+)\s?=\s?(.+)", |cfg, caps| {
            let name = capture(caps, 1);
            let value = capture(caps, 2);
            if name == value {
                cfg.model_values.insert(name.to_owned());
            } else {
                cfg.constants.insert(name.to_owned(), value.to_owned());
            }
        }),
    ]
});

fn capture<'t>(caps: &Captures<'t>, group: usize) -> &'t str {
    caps.get(group).map_or("", |m| m.as_str())
}

/// Parse configuration text into a [`Cfg`].
///
/// Never fails: unrecognised lines are skipped. A later `SPECIFICATION`
/// line replaces an earlier one, and a later assignment to the same constant
/// replaces the earlier value.
///
/// # Examples
///
/// ```
/// use tlacli::cfg::parse;
///
/// let cfg = parse("SPECIFICATION Live\nINVARIANT TypeOK\n  N = 3\n  p1 = p1");
/// assert_eq!(cfg.spec.as_deref(), Some("Live"));
/// assert!(cfg.invariants.contains("TypeOK"));
/// assert_eq!(cfg.constants["N"], "3");
/// assert!(cfg.model_values.contains("p1"));
/// ```
#[must_use]
pub fn parse(text: &str) -> Cfg {
    let mut cfg = Cfg::default();
    for line in text.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }
        for rule in RULES.iter() {
            if rule.try_apply(&mut cfg, line) {
                break;
            }
        }
    }
    cfg
}

/// Render a [`Cfg`] in the syntax TLC reads.
///
/// Invariants, properties and model values are emitted in ascending order and
/// constants in key order, so equal configurations always render identically.
/// Empty sections are omitted and no trailing newline is written.
///
/// # Examples
///
/// ```
/// use tlacli::cfg::{Cfg, format};
///
/// let cfg = Cfg::new().with_invariant("TypeOK").with_constant("N", "3");
/// assert_eq!(
///     format(&cfg),
///     "SPECIFICATION Spec\nINVARIANT TypeOK\nCONSTANTS \\* regular assignments\n  N = 3"
/// );
/// ```
#[must_use]
pub fn format(cfg: &Cfg) -> String {
    let mut out = vec![format!("SPECIFICATION {}", cfg.spec_or_default())];
    out.extend(cfg.invariants.iter().map(|inv| format!("INVARIANT {inv}")));
    out.extend(cfg.properties.iter().map(|prop| format!("PROPERTY {prop}")));

    if !cfg.model_values.is_empty() {
        out.push(String::new());
        out.push(MODEL_VALUES_HEADER.to_owned());
        out.extend(
            cfg.model_values
                .iter()
                .map(|model| format!("  {model} = {model}")),
        );
    }

    if !cfg.constants.is_empty() {
        out.push(CONSTANTS_HEADER.to_owned());
        out.extend(
            cfg.constants
                .iter()
                .map(|(name, value)| format!("  {name} = {value}")),
        );
    }
    out.join("\n")
}
