pub trait Color {
    fn colored(&self) -> Self;
}

impl Color for String {
    /// Translates legacy `&`-style color codes into the `§` form the client
    /// renders.
    fn colored(&self) -> Self {
        self.replace("&", "§")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_ampersand_codes() {
        assert_eq!(
            String::from("&cServer not found.").colored(),
            "§cServer not found."
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(String::from("Connecting...").colored(), "Connecting...");
    }
}
