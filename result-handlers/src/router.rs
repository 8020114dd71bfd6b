//! Command routing: decides which handler owns a message.

/// Where a message goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Start,
    Help,
    /// `/grade` with its positional arguments (possibly the wrong number).
    Grade(Vec<String>),
    /// Free text, treated as `<batch> <sem> <roll>`.
    ResultQuery,
    /// A command nobody handles; no reply is sent.
    UnknownCommand(String),
    /// No text at all.
    Empty,
}

/// Classifies message text. A `@botname` suffix on the command is ignored and command names are case-insensitive.
pub fn classify(text: &str) -> Route {
    let text = text.trim();
    if text.is_empty() {
        return Route::Empty;
    }
    let Some(rest) = text.strip_prefix('/') else {
        return Route::ResultQuery;
    };

    let mut parts = rest.split_whitespace();
    let head = match parts.next() {
        Some(head) if !rest.starts_with(char::is_whitespace) => head,
        _ => return Route::UnknownCommand(String::new()),
    };
    let name = head.split('@').next().unwrap_or_default().to_lowercase();

    match name.as_str() {
        "start" => Route::Start,
        "help" => Route::Help,
        "grade" => Route::Grade(parts.map(str::to_string).collect()),
        _ => Route::UnknownCommand(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_commands() {
        assert_eq!(classify("/start"), Route::Start);
        assert_eq!(classify("/HELP"), Route::Help);
        assert_eq!(classify("/start@results_bot"), Route::Start);
        assert_eq!(
            classify("/grade 2020-23 SV2121XXX"),
            Route::Grade(vec!["2020-23".to_string(), "SV2121XXX".to_string()])
        );
        assert_eq!(
            classify("/grade@results_bot  2020-23"),
            Route::Grade(vec!["2020-23".to_string()])
        );
    }

    #[test]
    fn test_classify_free_text() {
        assert_eq!(classify("2020-23 1ST SV2121XXX"), Route::ResultQuery);
        assert_eq!(classify("hello"), Route::ResultQuery);
    }

    #[test]
    fn test_classify_unknown_and_empty() {
        assert_eq!(classify("/stats"), Route::UnknownCommand("stats".to_string()));
        assert_eq!(classify("/"), Route::UnknownCommand(String::new()));
        assert_eq!(classify("/ grade"), Route::UnknownCommand(String::new()));
        assert_eq!(classify("   "), Route::Empty);
    }
}
