//! Built-in knowledge base for the MiniBiscos assistant.
//!
//! The knowledge base is a static, compile-time table: ordered topics of
//! keyword rules plus response buckets for greetings, thanks, farewells
//! and fallbacks. It is never mutated at runtime. [`KnowledgeBase::validate`]
//! is run once at startup so the resolver can assume every bucket and rule
//! is well formed.

use crumb_core::{CrumbError, Result};

/// A keyword rule: if any trigger appears in the normalized input, the
/// rule answers with its fixed response.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

/// A named, ordered group of keyword rules.
#[derive(Debug, Clone, Copy)]
pub struct Topic {
    pub name: &'static str,
    pub rules: &'static [KeywordRule],
}

/// A trigger set paired with interchangeable response variants, one of
/// which is picked at random.
#[derive(Debug, Clone, Copy)]
pub struct ResponseBucket {
    pub triggers: &'static [&'static str],
    pub responses: &'static [&'static str],
}

/// The complete response knowledge for the assistant.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    pub empty_prompt: &'static str,
    pub greetings: ResponseBucket,
    pub thanks: ResponseBucket,
    pub farewells: ResponseBucket,
    pub fallbacks: &'static [&'static str],
    pub topics: &'static [Topic],
}

// ============================================================================
// Built-in data
// ============================================================================

static GREETINGS: ResponseBucket = ResponseBucket {
    triggers: &[
        "hello",
        "hi",
        "hey",
        "good morning",
        "good afternoon",
        "good evening",
    ],
    responses: &[
        "Hello! Welcome to MiniBiscos 🍪 How can I sweeten your day today?",
        "Hi! Great to see you here. Need help with our cookies?",
        "Welcome to MiniBiscos — tradition, flavor, and faith. How can I help you?",
    ],
};

static THANKS: ResponseBucket = ResponseBucket {
    triggers: &["thank", "thanks", "appreciate", "grateful"],
    responses: &[
        "You're welcome! I'm always here if you need anything else.",
        "With love! Need more info?",
        "Happy to help 🍪",
    ],
};

static FAREWELLS: ResponseBucket = ResponseBucket {
    triggers: &[
        "bye",
        "goodbye",
        "see you",
        "farewell",
        "take care",
        "later",
        "cya",
    ],
    responses: &[
        "See you soon! May your day be as sweet as our cookies.",
        "It was a pleasure chatting with you. Come back to MiniBiscos anytime!",
        "Bye! See you at the next farmers market 🍪",
    ],
};

static FALLBACKS: &[&str] = &[
    "Hmm, I couldn't find that information. Would you like to chat with our team on WhatsApp?",
    "Could you rephrase your question? Or I can connect you with our support team.",
    "I'm still learning. Maybe it's best to talk to one of our team members. Want me to help with that?",
];

static TOPICS: &[Topic] = &[
    Topic {
        name: "products",
        rules: &[
            KeywordRule {
                triggers: &["products", "cookies", "flavors", "varieties"],
                response: "MiniBiscos offers artisanal buttery cookies in seven fixed flavors, \
                           plus special editions depending on the season. Each cookie is made \
                           with selected ingredients and a touch of love. Would you like to know \
                           our current flavors?",
            },
            KeywordRule {
                triggers: &[
                    "seasonal",
                    "limited edition",
                    "special dates",
                    "christmas",
                    "easter",
                    "mother's day",
                ],
                response: "Our seasonal flavors celebrate each time of year with special \
                           recipes. At the moment we have a limited edition for Mother's Day. \
                           Would you like to see?",
            },
        ],
    },
    Topic {
        name: "prices",
        rules: &[KeywordRule {
            triggers: &["price", "prices", "how much", "cost", "price list"],
            response: "Prices vary according to type and quantity. We work with kits and \
                       special packaging. Can I show you the prices or would you prefer to talk \
                       to the team via WhatsApp?",
        }],
    },
    Topic {
        name: "ordering",
        rules: &[
            KeywordRule {
                triggers: &["order", "buy", "place order", "how to order"],
                response: "Currently, we're accepting orders via WhatsApp, phone or email. Our \
                           online store will be available soon! Can I direct you to WhatsApp \
                           now?",
            },
            KeywordRule {
                triggers: &["events", "parties", "wholesale", "corporate", "wedding"],
                response: "We make special kits for events and custom party favors. Talk to our \
                           team to receive a custom proposal.",
            },
        ],
    },
    Topic {
        name: "location",
        rules: &[KeywordRule {
            triggers: &[
                "address",
                "where are you",
                "location",
                "visit",
                "physical store",
            ],
            response: "We are an artisanal brand based in Rancho Cordova, California. We don't \
                       have a physical store yet, but we participate in farmers markets in the \
                       region. Follow our Instagram to know where we'll be!",
        }],
    },
    Topic {
        name: "company",
        rules: &[
            KeywordRule {
                triggers: &["who are you", "about", "story", "company", "foundation"],
                response: "MiniBiscos was born from the union of two mothers with a common \
                           passion: transforming buttery cookies into unforgettable moments. \
                           Each recipe carries tradition, love and faith.",
            },
            KeywordRule {
                triggers: &["ingredients", "quality", "raw materials", "what do you use"],
                response: "Our cookies are made with real butter, high-quality flour and \
                           selected ingredients including authentic Leite Ninho (Brazilian sweet \
                           powdered milk brand) in some of our specialty cookies. Nothing \
                           industrialized — everything handmade with care.",
            },
        ],
    },
    Topic {
        name: "contact",
        rules: &[
            KeywordRule {
                triggers: &["phone", "contact", "email", "whatsapp", "talk to you"],
                response: "You can talk to us via WhatsApp by clicking the button here on the \
                           website, or through our social media. We're also available by email \
                           or phone. We're here to help!",
            },
            KeywordRule {
                triggers: &["problem", "complaint", "bad", "spoiled", "didn't like"],
                response: "We're sorry if something didn't go as expected. We want to fix it! \
                           Please talk to our team via WhatsApp so we can resolve it as quickly \
                           as possible.",
            },
        ],
    },
];

static BUILTIN: KnowledgeBase = KnowledgeBase {
    empty_prompt: "Looks like you didn't type anything. How can I help?",
    greetings: GREETINGS,
    thanks: THANKS,
    farewells: FAREWELLS,
    fallbacks: FALLBACKS,
    topics: TOPICS,
};

/// The built-in knowledge base shipped with the assistant.
pub fn builtin() -> &'static KnowledgeBase {
    &BUILTIN
}

// ============================================================================
// Validation
// ============================================================================

impl KnowledgeBase {
    /// Checks structural invariants the resolver relies on.
    ///
    /// Returns [`CrumbError::Knowledge`] when a bucket has no triggers or
    /// responses, a rule is missing triggers or a response, any entry is
    /// blank, or a trigger is not already lowercase. Intended to run once
    /// at startup; a failure is fatal.
    pub fn validate(&self) -> Result<()> {
        if self.empty_prompt.trim().is_empty() {
            return Err(CrumbError::Knowledge("empty prompt is blank".to_string()));
        }

        validate_bucket("greetings", &self.greetings)?;
        validate_bucket("thanks", &self.thanks)?;
        validate_bucket("farewells", &self.farewells)?;

        if self.fallbacks.is_empty() {
            return Err(CrumbError::Knowledge(
                "fallback bucket has no responses".to_string(),
            ));
        }
        for response in self.fallbacks {
            if response.trim().is_empty() {
                return Err(CrumbError::Knowledge(
                    "fallback bucket contains a blank response".to_string(),
                ));
            }
        }

        for topic in self.topics {
            if topic.name.trim().is_empty() {
                return Err(CrumbError::Knowledge("topic has a blank name".to_string()));
            }
            if topic.rules.is_empty() {
                return Err(CrumbError::Knowledge(format!(
                    "topic '{}' has no rules",
                    topic.name
                )));
            }
            for rule in topic.rules {
                validate_triggers(topic.name, rule.triggers)?;
                if rule.response.trim().is_empty() {
                    return Err(CrumbError::Knowledge(format!(
                        "topic '{}' has a rule with a blank response",
                        topic.name
                    )));
                }
            }
        }

        Ok(())
    }
}

fn validate_bucket(name: &str, bucket: &ResponseBucket) -> Result<()> {
    validate_triggers(name, bucket.triggers)?;
    if bucket.responses.is_empty() {
        return Err(CrumbError::Knowledge(format!(
            "bucket '{}' has no responses",
            name
        )));
    }
    for response in bucket.responses {
        if response.trim().is_empty() {
            return Err(CrumbError::Knowledge(format!(
                "bucket '{}' contains a blank response",
                name
            )));
        }
    }
    Ok(())
}

fn validate_triggers(owner: &str, triggers: &[&str]) -> Result<()> {
    if triggers.is_empty() {
        return Err(CrumbError::Knowledge(format!(
            "'{}' has no triggers",
            owner
        )));
    }
    for trigger in triggers {
        if trigger.trim().is_empty() {
            return Err(CrumbError::Knowledge(format!(
                "'{}' contains a blank trigger",
                owner
            )));
        }
        if *trigger != trigger.to_lowercase() {
            return Err(CrumbError::Knowledge(format!(
                "'{}' trigger '{}' is not lowercase",
                owner, trigger
            )));
        }
    }
    Ok(())
}
