// Prompt fragments for the user-role message.
// The system instruction lives in template/prompts.rs.

/// Prefix for the user-role message. The raw input follows verbatim.
pub const USER_QUERY_PREFIX: &str = "User Query: ";

/// Builds the user-role message content for a raw request.
pub fn user_query(user_input: &str) -> String {
    format!("{USER_QUERY_PREFIX}{user_input}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_query_keeps_input_verbatim() {
        assert_eq!(
            user_query("  Write a blog post about AI\n"),
            "User Query:   Write a blog post about AI\n"
        );
    }
}
