pub struct ParsedCommand<'a> {
    pub name: String,
    pub bot_username: Option<&'a str>,
}

impl<'a> ParsedCommand<'a> {
    pub fn parse(text: &'a str) -> Option<Self> {
        let rest = text.strip_prefix('/')?;
        let first_word = rest.split_whitespace().next().unwrap_or_default();

        let (name, bot_username) =
            first_word.split_once('@').map_or((first_word, None), |parts| (parts.0, Some(parts.1)));

        if name.is_empty() {
            return None;
        }

        Some(Self { name: name.to_lowercase(), bot_username })
    }

    pub fn addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (self.bot_username, bot_username) {
            (None, _) => true,
            (Some(target), Some(username)) => target.eq_ignore_ascii_case(username),
            (Some(_), None) => false,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_command() {
        let command = ParsedCommand::parse("/start").unwrap();

        assert_eq!(command.name, "start");
        assert_eq!(command.bot_username, None);
    }

    #[test]
    fn parse_command_with_username() {
        let command = ParsedCommand::parse("/START@LookbookBot trailing words").unwrap();

        assert_eq!(command.name, "start");
        assert_eq!(command.bot_username, Some("LookbookBot"));
    }

    #[test]
    fn parse_rejects_non_commands() {
        assert!(ParsedCommand::parse("start").is_none());
        assert!(ParsedCommand::parse("/").is_none());
        assert!(ParsedCommand::parse("/@username").is_none());
    }

    #[test]
    fn addressing() {
        let command = ParsedCommand::parse("/start@lookbookbot").unwrap();

        assert!(command.addressed_to(Some("LookbookBot")));
        assert!(!command.addressed_to(Some("other_bot")));
        assert!(!command.addressed_to(None));

        let bare = ParsedCommand::parse("/start").unwrap();

        assert!(bare.addressed_to(Some("LookbookBot")));
        assert!(bare.addressed_to(None));
    }
}
