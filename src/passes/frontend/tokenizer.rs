pub const COMMAND_SEPARATOR: char = ';';
pub const TOKEN_SEPARATOR: char = ' ';

/// Splits a script into trimmed commands. Empty commands are kept, so a trailing `;`
/// yields an empty last command.
pub fn split_commands(script: &str) -> Vec<&str> {
    script.split(COMMAND_SEPARATOR).map(str::trim).collect()
}

/// Splits a command on single spaces. Runs of spaces produce empty tokens.
pub fn split_tokens(command: &str) -> Vec<&str> {
    command.split(TOKEN_SEPARATOR).map(str::trim).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_trimmed_and_ordered() {
        assert_eq!(
            split_commands("READ a:b c:d ;  WRITE e:f g:h"),
            vec!["READ a:b c:d", "WRITE e:f g:h"]
        );
    }

    #[test]
    fn trailing_separator_keeps_empty_command() {
        assert_eq!(split_commands("READ a:b c:d;"), vec!["READ a:b c:d", ""]);
        assert_eq!(split_commands(""), vec![""]);
    }

    #[test]
    fn double_spaces_are_not_collapsed() {
        assert_eq!(split_tokens("READ  a:b c:d"), vec!["READ", "", "a:b", "c:d"]);
    }

    #[test]
    fn tabs_stay_inside_tokens() {
        assert_eq!(split_tokens("READ\ta:b c:d"), vec!["READ\ta:b", "c:d"]);
    }
}
