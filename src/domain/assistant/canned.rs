//! Keyword-matching assistant with a fixed set of replies.

/// Greeting that opens every conversation.
pub const WELCOME: &str =
    "Hello! I'm your AI financial assistant. How can I help with your investment questions today?";

/// Reply when nothing in the input matches.
pub const FALLBACK: &str = "I'm sorry, I don't have enough information to answer that question accurately. Could you provide more details?";

const THANKS_REPLY: &str = "You're welcome! If you have any more questions about your investments or financial planning, feel free to ask.";

const FUND_REPLY: &str = "ETFs (Exchange Traded Funds) and mutual funds are both investment vehicles that pool money from multiple investors to buy a diversified portfolio of assets. ETFs trade like stocks throughout the day, while mutual funds trade once at the end of the trading day. Both can be excellent options for diversification, but they differ in terms of cost, tax efficiency, and trading flexibility.";

/// Keyword table, checked in order; the first substring match wins.
const KEYWORD_REPLIES: &[(&str, &str)] = &[
    ("hello", WELCOME),
    (
        "hi",
        "Hi there! I'm here to help with your financial questions. What would you like to know about investing?",
    ),
    (
        "help",
        "I can help you with various financial topics like investment basics, risk assessment, portfolio diversification, and more. What would you like to learn about?",
    ),
    (
        "what is investing",
        "Investing is the process of allocating resources, usually money, with the expectation of generating income or profit over time. Unlike saving, which is setting money aside for future use, investing involves putting your money to work with the goal of growing it.",
    ),
    (
        "what is risk",
        "In investing, risk refers to the possibility that an investment's actual return may be different than expected, particularly the chance of losing some or all of the original investment. Generally, higher risk investments have the potential for higher returns, while lower risk investments typically offer lower potential returns.",
    ),
    (
        "how to start investing",
        "Starting to invest involves a few key steps: 1) Set clear financial goals, 2) Build an emergency fund first, 3) Understand your risk tolerance, 4) Research investment options (stocks, bonds, funds), 5) Start small and consistent, 6) Consider using tax-advantaged accounts like 401(k)s or IRAs, and 7) Regularly review and adjust your investments.",
    ),
];

/// Stateless responder over [`KEYWORD_REPLIES`].
///
/// Matching is case-insensitive substring search, so "this" matches "hi".
/// Fund questions take precedence over thanks, which takes precedence over
/// the keyword table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedAssistant;

impl CannedAssistant {
    pub fn welcome(&self) -> &'static str {
        WELCOME
    }

    pub fn reply(&self, input: &str) -> &'static str {
        let input = input.to_lowercase();

        if input.contains("etf") || input.contains("mutual fund") {
            return FUND_REPLY;
        }
        if input.contains("thank") {
            return THANKS_REPLY;
        }

        KEYWORD_REPLIES
            .iter()
            .find(|(keyword, _)| input.contains(keyword))
            .map(|(_, reply)| *reply)
            .unwrap_or(FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_matches_case_insensitively() {
        assert_eq!(CannedAssistant.reply("HELLO there"), WELCOME);
    }

    #[test]
    fn first_keyword_in_table_order_wins() {
        // contains both "hi" and "help"; "hi" is earlier in the table
        let reply = CannedAssistant.reply("hi, I need help");
        assert!(reply.starts_with("Hi there!"));
    }

    #[test]
    fn substring_matching_catches_embedded_keywords() {
        assert!(CannedAssistant.reply("what is this?").starts_with("Hi there!"));
    }

    #[test]
    fn thanks_overrides_keyword_table() {
        assert_eq!(CannedAssistant.reply("thanks for the help"), THANKS_REPLY);
    }

    #[test]
    fn fund_question_overrides_thanks_and_keywords() {
        assert_eq!(CannedAssistant.reply("hi, what about ETFs? thanks"), FUND_REPLY);
        assert_eq!(CannedAssistant.reply("Is a Mutual Fund safe?"), FUND_REPLY);
    }

    #[test]
    fn multi_word_keywords_match() {
        let reply = CannedAssistant.reply("So, what is investing exactly?");
        assert!(reply.starts_with("Investing is the process"));
    }

    #[test]
    fn unmatched_input_gets_fallback() {
        assert_eq!(CannedAssistant.reply("Should I buy gold?"), FALLBACK);
    }
}
