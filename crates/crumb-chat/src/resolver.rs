//! Keyword-based response resolution.
//!
//! Resolution is a fixed priority cascade over the normalized input:
//! empty check, greeting bucket, thanks bucket, farewell bucket, then
//! every topic rule in declaration order. The first match wins. Input
//! that matches nothing gets a random fallback response.

use rand::seq::IndexedRandom;

use crate::knowledge::{self, KnowledgeBase};

/// Resolves a reply for `input` against the built-in knowledge base.
pub fn resolve(input: &str) -> String {
    resolve_with(knowledge::builtin(), input)
}

/// Resolves a reply for `input` against an explicit knowledge base.
///
/// Matching is case-insensitive substring containment: the input is
/// trimmed and lowercased, and a trigger matches wherever it appears in
/// that text, including inside longer words. Topic replies are fixed per
/// rule; bucket and fallback replies are picked uniformly at random from
/// their variants. Never fails and never returns an empty string for a
/// validated knowledge base.
pub fn resolve_with(kb: &KnowledgeBase, input: &str) -> String {
    let normalized = input.trim().to_lowercase();

    if normalized.is_empty() {
        return kb.empty_prompt.to_string();
    }

    if contains_any(&normalized, kb.greetings.triggers) {
        return pick(kb.greetings.responses);
    }
    if contains_any(&normalized, kb.thanks.triggers) {
        return pick(kb.thanks.responses);
    }
    if contains_any(&normalized, kb.farewells.triggers) {
        return pick(kb.farewells.responses);
    }

    for topic in kb.topics {
        for rule in topic.rules {
            if contains_any(&normalized, rule.triggers) {
                return rule.response.to_string();
            }
        }
    }

    pick(kb.fallbacks)
}

fn contains_any(haystack: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|trigger| haystack.contains(trigger))
}

fn pick(responses: &[&str]) -> String {
    responses
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{builtin, KeywordRule, ResponseBucket, Topic};

    /// Single-variant buckets so cascade order is observable without
    /// randomness.
    fn cascade_kb() -> KnowledgeBase {
        KnowledgeBase {
            empty_prompt: "nothing typed",
            greetings: ResponseBucket {
                triggers: &["salve"],
                responses: &["greeting reply"],
            },
            thanks: ResponseBucket {
                triggers: &["obliged"],
                responses: &["thanks reply"],
            },
            farewells: ResponseBucket {
                triggers: &["adieu"],
                responses: &["farewell reply"],
            },
            fallbacks: &["fallback reply"],
            topics: &[
                Topic {
                    name: "alpha",
                    rules: &[
                        KeywordRule {
                            triggers: &["first", "shared"],
                            response: "alpha first",
                        },
                        KeywordRule {
                            triggers: &["second"],
                            response: "alpha second",
                        },
                    ],
                },
                Topic {
                    name: "beta",
                    rules: &[KeywordRule {
                        triggers: &["shared", "third"],
                        response: "beta first",
                    }],
                },
            ],
        }
    }

    // ---- Normalization ----

    #[test]
    fn test_empty_input_returns_empty_prompt() {
        assert_eq!(resolve(""), builtin().empty_prompt);
    }

    #[test]
    fn test_whitespace_input_returns_empty_prompt() {
        assert_eq!(resolve("   \t  "), builtin().empty_prompt);
        assert_eq!(
            resolve("  \n "),
            "Looks like you didn't type anything. How can I help?"
        );
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let reply = resolve("HELLO THERE");
        assert!(builtin().greetings.responses.contains(&reply.as_str()));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let reply = resolve("   good morning   ");
        assert!(builtin().greetings.responses.contains(&reply.as_str()));
    }

    // ---- Bucket precedence ----

    #[test]
    fn test_greeting_matches_bucket() {
        let reply = resolve("hey");
        assert!(builtin().greetings.responses.contains(&reply.as_str()));
    }

    #[test]
    fn test_thanks_matches_bucket() {
        let reply = resolve("thanks a bunch");
        assert!(builtin().thanks.responses.contains(&reply.as_str()));
    }

    #[test]
    fn test_farewell_matches_bucket() {
        let reply = resolve("ok goodbye now");
        assert!(builtin().farewells.responses.contains(&reply.as_str()));
    }

    #[test]
    fn test_greeting_outranks_topic_rules() {
        // "hi" and "how much" both match; the greeting bucket is checked
        // before any topic.
        let reply = resolve("hi, how much are the cookies");
        assert!(builtin().greetings.responses.contains(&reply.as_str()));
    }

    #[test]
    fn test_greeting_outranks_thanks_and_farewell() {
        let kb = cascade_kb();
        assert_eq!(resolve_with(&kb, "salve obliged adieu"), "greeting reply");
        assert_eq!(resolve_with(&kb, "obliged adieu"), "thanks reply");
        assert_eq!(resolve_with(&kb, "adieu first"), "farewell reply");
    }

    // ---- Topic rules ----

    #[test]
    fn test_products_rule() {
        let reply = resolve("what cookies do you offer");
        assert_eq!(reply, builtin().topics[0].rules[0].response);
    }

    #[test]
    fn test_seasonal_rule() {
        let reply = resolve("do you have a limited edition for easter");
        assert_eq!(reply, builtin().topics[0].rules[1].response);
    }

    #[test]
    fn test_prices_rule() {
        let reply = resolve("how much does a box cost");
        assert_eq!(reply, builtin().topics[1].rules[0].response);
    }

    #[test]
    fn test_ordering_rule() {
        let reply = resolve("i want to buy a dozen");
        assert_eq!(reply, builtin().topics[2].rules[0].response);
    }

    #[test]
    fn test_events_rule() {
        let reply = resolve("do you cater weddings");
        assert_eq!(reply, builtin().topics[2].rules[1].response);
    }

    #[test]
    fn test_location_rule() {
        let reply = resolve("where are you located");
        assert_eq!(reply, builtin().topics[3].rules[0].response);
    }

    #[test]
    fn test_company_rule() {
        let reply = resolve("tell me your story");
        assert_eq!(reply, builtin().topics[4].rules[0].response);
    }

    #[test]
    fn test_ingredients_rule() {
        let reply = resolve("what ingredients do you use");
        assert_eq!(reply, builtin().topics[4].rules[1].response);
    }

    #[test]
    fn test_contact_rule() {
        let reply = resolve("can i reach you on whatsapp");
        assert_eq!(reply, builtin().topics[5].rules[0].response);
    }

    #[test]
    fn test_complaint_rule() {
        let reply = resolve("i have a complaint");
        assert_eq!(reply, builtin().topics[5].rules[1].response);
    }

    #[test]
    fn test_earlier_topic_wins() {
        let kb = cascade_kb();
        // "shared" triggers rules in both topics; alpha is declared first.
        assert_eq!(resolve_with(&kb, "shared"), "alpha first");
    }

    #[test]
    fn test_earlier_rule_wins_within_topic() {
        let kb = cascade_kb();
        assert_eq!(resolve_with(&kb, "second and first"), "alpha first");
    }

    #[test]
    fn test_topic_reply_is_deterministic() {
        let first = resolve("where are you located");
        for _ in 0..5 {
            assert_eq!(resolve("where are you located"), first);
        }
    }

    // ---- Substring containment ----

    #[test]
    fn test_trigger_matches_inside_longer_word() {
        // "this" contains "hi", so the greeting bucket answers even though
        // no greeting word was typed. Matching is plain substring
        // containment, not word-boundary aware.
        let reply = resolve("this looks great");
        assert!(builtin().greetings.responses.contains(&reply.as_str()));
    }

    // ---- Fallback ----

    #[test]
    fn test_unmatched_input_gets_fallback() {
        let reply = resolve("xyzzy plugh");
        assert!(builtin().fallbacks.contains(&reply.as_str()));
    }

    #[test]
    fn test_fallback_never_empty() {
        for _ in 0..10 {
            assert!(!resolve("xyzzy plugh").is_empty());
        }
    }

    #[test]
    fn test_single_variant_fallback_is_stable() {
        let kb = cascade_kb();
        assert_eq!(resolve_with(&kb, "zzz"), "fallback reply");
    }
}
