use std::fmt;
use std::str::FromStr;

/// Deployment of the inscription API the client talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InscriptionEnv {
    /// Production deployment (mainnet).
    #[default]
    Live,
    /// Testnet deployment.
    Dev,
}

impl InscriptionEnv {
    /// Base URL of the selected deployment.
    pub fn base_url(self) -> &'static str {
        match self {
            InscriptionEnv::Live => "https://api.ordinalsbot.com",
            InscriptionEnv::Dev => "https://testnet-api.ordinalsbot.com",
        }
    }

    pub fn is_live(self) -> bool {
        matches!(self, InscriptionEnv::Live)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            InscriptionEnv::Live => "live",
            InscriptionEnv::Dev => "dev",
        }
    }
}

impl fmt::Display for InscriptionEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InscriptionEnv {
    type Err = std::convert::Infallible;

    /// `"live"` selects production; any other value selects testnet, matching
    /// the remote service's own environment handling.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(if value == "live" {
            InscriptionEnv::Live
        } else {
            InscriptionEnv::Dev
        })
    }
}

#[cfg(test)]
mod tests {
    use super::InscriptionEnv;

    #[test]
    fn live_selects_production_base_url() {
        assert_eq!(
            InscriptionEnv::Live.base_url(),
            "https://api.ordinalsbot.com"
        );
    }

    #[test]
    fn dev_selects_testnet_base_url() {
        assert_eq!(
            InscriptionEnv::Dev.base_url(),
            "https://testnet-api.ordinalsbot.com"
        );
    }

    #[test]
    fn anything_but_live_parses_as_dev() {
        assert_eq!("live".parse(), Ok(InscriptionEnv::Live));
        assert_eq!("dev".parse(), Ok(InscriptionEnv::Dev));
        assert_eq!("testnet".parse(), Ok(InscriptionEnv::Dev));
        assert_eq!("".parse(), Ok(InscriptionEnv::Dev));
    }

    #[test]
    fn default_is_live() {
        assert_eq!(InscriptionEnv::default(), InscriptionEnv::Live);
        assert!(InscriptionEnv::Live.is_live());
        assert!(!InscriptionEnv::Dev.is_live());
    }

    #[test]
    fn display_matches_selector_strings() {
        assert_eq!(InscriptionEnv::Live.to_string(), "live");
        assert_eq!(InscriptionEnv::Dev.to_string(), "dev");
    }
}
