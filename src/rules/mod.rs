//! Password acceptance rules
//!
//! The rule set is data: an ordered list of predicate + feedback pairs,
//! applied independently without short-circuiting.

mod charset;
mod denylist;
mod length;

pub use charset::{SPECIAL_CHARS, has_digit, has_lowercase, has_special, has_uppercase};
pub use denylist::passes_denylist;
pub use length::{MIN_LENGTH, meets_min_length};

/// A single acceptance rule.
///
/// `check` returns true when the candidate passes; `feedback` is the phrase
/// appended to the verdict when it does not.
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&str) -> bool,
    pub feedback: &'static str,
}

/// The fixed rule set, in evaluation order.
pub const RULE_SET: &[Rule] = &[
    Rule {
        name: "length",
        check: meets_min_length,
        feedback: "must be at least 8 characters long.",
    },
    Rule {
        name: "uppercase",
        check: has_uppercase,
        feedback: "must include at least one uppercase letter.",
    },
    Rule {
        name: "lowercase",
        check: has_lowercase,
        feedback: "must include at least one lowercase letter.",
    },
    Rule {
        name: "digit",
        check: has_digit,
        feedback: "must include at least one number.",
    },
    Rule {
        name: "special",
        check: has_special,
        feedback: "must include at least one special character.",
    },
    Rule {
        name: "denylist",
        check: passes_denylist,
        feedback: "Not strong enough! Try Again!",
    },
];
