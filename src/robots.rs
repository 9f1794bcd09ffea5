use crate::error::PolicyError;
use crate::fetch::Fetcher;
use texting_robots::Robot;
use url::Url;

/// Outcome of checking a URL against the site's robots.txt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionDecision {
    Allowed,
    Disallowed,
}

impl PermissionDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, PermissionDecision::Allowed)
    }
}

/// robots.txt rules as they apply to one agent
pub struct RobotsRules {
    robot: Robot,
}

impl RobotsRules {
    /// Parse `content` for `user_agent`.
    ///
    /// Only the product token (the identity up to the first `/`) is matched
    /// against `User-agent` lines; groups naming it take precedence over `*`.
    pub fn parse(user_agent: &str, content: &str) -> Result<Self, PolicyError> {
        let robot = Robot::new(&product_token(user_agent), content.as_bytes())
            .map_err(|e| PolicyError::Parse(e.to_string()))?;
        Ok(Self { robot })
    }

    /// Whether the agent may fetch `url`. Longest match wins, Allow wins ties,
    /// and paths are compared after percent-encoding normalization.
    pub fn can_fetch(&self, url: &Url) -> bool {
        url.path() == "/robots.txt" || self.robot.allowed(url.as_str())
    }
}

fn product_token(user_agent: &str) -> String {
    user_agent
        .split('/')
        .next()
        .unwrap_or_default()
        .trim()
        .to_string()
}

/// Location of the robots.txt governing `url`
pub fn robots_url(url: &Url) -> Result<Url, url::ParseError> {
    url.join("/robots.txt")
}

/// Decide whether the fetcher's agent may fetch `url`.
///
/// Any failure to retrieve or parse robots.txt (transport error, non-success
/// status, undecodable or unparseable body) falls back to `Allowed` with a
/// warning, so a site without a readable policy can still be scraped.
pub async fn check_permission(fetcher: &Fetcher, url: &Url) -> PermissionDecision {
    let user_agent = fetcher.user_agent();
    let robots = match robots_url(url) {
        Ok(robots) => robots,
        Err(e) => {
            ::log::warn!("Cannot locate robots.txt for {}: {}; assuming allowed", url, e);
            return PermissionDecision::Allowed;
        }
    };

    ::log::info!("Checking {} for agent '{}'", robots, user_agent);

    let body = match fetcher.fetch(robots.as_str()).await {
        Ok(body) => body,
        Err(e) => {
            ::log::warn!("Could not read robots.txt ({}); assuming {} is allowed", e, url);
            return PermissionDecision::Allowed;
        }
    };

    match RobotsRules::parse(user_agent, &body) {
        Ok(rules) if rules.can_fetch(url) => PermissionDecision::Allowed,
        Ok(_) => PermissionDecision::Disallowed,
        Err(e) => {
            ::log::warn!("Could not parse {} ({}); assuming {} is allowed", robots, e, url);
            PermissionDecision::Allowed
        }
    }
}
