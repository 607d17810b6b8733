// ============================================================================
// Assistant Rules
// Ordered keyword classification for the guidance assistant
// ============================================================================

use std::sync::LazyLock;

use regex::Regex;

use super::replies;

/// Greetings anchor at the start of the message; everything else matches
/// anywhere.
static GREETING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(hello|hi|hey|good morning|good afternoon|good evening|greetings)")
        .expect("greeting pattern")
});

/// Keyword rules in precedence order: the first match wins, so broader
/// topics sit above narrower ones exactly as the product defines them.
static KEYWORD_RULES: LazyLock<Vec<(Topic, Regex)>> = LazyLock::new(|| {
    [
        (Topic::Budgeting, r"budget|expense|spending|monthly income|manage money"),
        (Topic::Savings, r"save|savings|emergency fund|save money"),
        (Topic::Investing, r"invest|investment|mutual fund|sip|equity|portfolio"),
        (
            Topic::Stocks,
            r"stock|share|should i buy|should i sell|nifty|sensex|price prediction",
        ),
        (Topic::Debt, r"debt|loan|credit card|emi|pay off|repay"),
        (Topic::Tax, r"tax|income tax|deduction|80c|itr|tax saving"),
        (Topic::Planning, r"financial plan|retirement|future|goal|planning"),
        (Topic::Risk, r"risk|safe|secure|volatile|volatility"),
        (Topic::Features, r"how to use|feature|tool|financepro|this app|what is"),
        (
            Topic::Calculations,
            r"calculate|how much|what amount|percentage|rate of return",
        ),
        (Topic::Identity, r"are you ai|who are you|what are you|chatbot|bot"),
    ]
    .into_iter()
    .map(|(topic, pattern)| (topic, Regex::new(pattern).expect("keyword pattern")))
    .collect()
});

/// Topic a user message is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topic {
    /// The message opens with a greeting.
    Greeting,
    /// The user asks what the assistant can do.
    Capabilities,
    /// Budgeting and expense management.
    Budgeting,
    /// Saving strategies and emergency funds.
    Savings,
    /// General investment concepts.
    Investing,
    /// Stock-specific questions, routed to the analysis tools.
    Stocks,
    /// Debt and loan management.
    Debt,
    /// Tax planning.
    Tax,
    /// Long-term financial planning.
    Planning,
    /// Investment risk.
    Risk,
    /// Questions about the product's features.
    Features,
    /// Requests for calculations.
    Calculations,
    /// Questions about the assistant itself.
    Identity,
    /// Nothing matched.
    Unrecognized,
}

impl Topic {
    /// Classify a user message.
    ///
    /// The message is trimmed and lowercased, then tried against the
    /// greeting anchor, the capability phrases, and the keyword rules in
    /// order. First match wins.
    pub fn classify(message: &str) -> Topic {
        let message = message.trim().to_lowercase();

        if GREETING.is_match(&message) {
            return Topic::Greeting;
        }
        if message.contains("help")
            || message.contains("what can you")
            || message.contains("what do you do")
        {
            return Topic::Capabilities;
        }
        for (topic, pattern) in KEYWORD_RULES.iter() {
            if pattern.is_match(&message) {
                return *topic;
            }
        }
        Topic::Unrecognized
    }

    /// The canned reply for this topic.
    pub fn canned_reply(self) -> &'static str {
        match self {
            Topic::Greeting => replies::GREETING,
            Topic::Capabilities => replies::CAPABILITIES,
            Topic::Budgeting => replies::BUDGETING,
            Topic::Savings => replies::SAVINGS,
            Topic::Investing => replies::INVESTING,
            Topic::Stocks => replies::STOCKS,
            Topic::Debt => replies::DEBT,
            Topic::Tax => replies::TAX,
            Topic::Planning => replies::PLANNING,
            Topic::Risk => replies::RISK,
            Topic::Features => replies::FEATURES,
            Topic::Calculations => replies::CALCULATIONS,
            Topic::Identity => replies::IDENTITY,
            Topic::Unrecognized => replies::FALLBACK,
        }
    }
}

/// Reply to a user message.
///
/// Classified messages get their topic's guidance paragraph. Unrecognized
/// messages shorter than 3 characters get a rephrase prompt; longer ones
/// get the general fallback listing what the assistant covers.
///
/// # Examples
/// ```
/// use finpro_core::advisor::{reply, Topic};
///
/// assert_eq!(Topic::classify("how do I create a budget?"), Topic::Budgeting);
/// assert!(reply("hello").starts_with("Hello!"));
/// ```
pub fn reply(message: &str) -> &'static str {
    match Topic::classify(message) {
        Topic::Unrecognized => {
            if message.trim().chars().count() < 3 {
                replies::REPHRASE
            } else {
                replies::FALLBACK
            }
        }
        topic => topic.canned_reply(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greetings_anchor_at_start() {
        assert_eq!(Topic::classify("hello"), Topic::Greeting);
        assert_eq!(Topic::classify("  Good Morning!"), Topic::Greeting);
        assert_eq!(Topic::classify("hey there"), Topic::Greeting);
        // "hi" mid-message is not a greeting
        assert_eq!(Topic::classify("this app"), Topic::Features);
    }

    #[test]
    fn test_capability_questions() {
        assert_eq!(Topic::classify("can you help me?"), Topic::Capabilities);
        assert_eq!(Topic::classify("what can you do"), Topic::Capabilities);
        // "help" outranks the keyword rules
        assert_eq!(Topic::classify("help with my budget"), Topic::Capabilities);
    }

    #[test]
    fn test_topic_keywords() {
        assert_eq!(Topic::classify("How do I create a budget?"), Topic::Budgeting);
        assert_eq!(Topic::classify("how to save money"), Topic::Savings);
        assert_eq!(Topic::classify("what is sip"), Topic::Investing);
        assert_eq!(Topic::classify("should i buy this stock"), Topic::Stocks);
        assert_eq!(Topic::classify("credit card emi"), Topic::Debt);
        assert_eq!(Topic::classify("80c deduction"), Topic::Tax);
        assert_eq!(Topic::classify("planning for retirement"), Topic::Planning);
        assert_eq!(Topic::classify("is equity volatile"), Topic::Investing);
        assert_eq!(Topic::classify("is gold safe"), Topic::Risk);
        assert_eq!(Topic::classify("financepro walkthrough"), Topic::Features);
        assert_eq!(Topic::classify("calculate my returns"), Topic::Calculations);
        assert_eq!(Topic::classify("are you ai"), Topic::Identity);
    }

    #[test]
    fn test_rule_order_decides_overlaps() {
        // Budgeting sits above Investing in the table
        assert_eq!(Topic::classify("investment budget"), Topic::Budgeting);
        // Investing sits above Features, so "what is sip" never hits Features
        assert_eq!(Topic::classify("what is a mutual fund"), Topic::Investing);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(Topic::classify("qwerty asdf"), Topic::Unrecognized);
        assert_eq!(Topic::classify(""), Topic::Unrecognized);
    }

    #[test]
    fn test_reply_selection() {
        assert_eq!(reply("hello"), replies::GREETING);
        assert_eq!(reply("how to manage money"), replies::BUDGETING);
        assert_eq!(reply("qwerty asdf"), replies::FALLBACK);
    }

    #[test]
    fn test_short_unrecognized_messages_get_rephrase_prompt() {
        assert_eq!(reply("ok"), replies::REPHRASE);
        assert_eq!(reply("  z "), replies::REPHRASE);
        assert_eq!(reply(""), replies::REPHRASE);
    }

    #[test]
    fn test_every_topic_has_a_reply() {
        let topics = [
            Topic::Greeting,
            Topic::Capabilities,
            Topic::Budgeting,
            Topic::Savings,
            Topic::Investing,
            Topic::Stocks,
            Topic::Debt,
            Topic::Tax,
            Topic::Planning,
            Topic::Risk,
            Topic::Features,
            Topic::Calculations,
            Topic::Identity,
            Topic::Unrecognized,
        ];
        for topic in topics {
            assert!(!topic.canned_reply().is_empty());
        }
    }
}
