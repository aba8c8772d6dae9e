//! Route classification for the top navigation.

/// Which family of page is being shown, derived once from the route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Home,
    /// Any route under `/launch-week` other than the X edition.
    LaunchWeek,
    /// `/launch-week/x`
    LaunchWeekX,
    /// `/ga-week`
    GaWeek,
    Standard,
}

impl PageMode {
    pub fn classify(path: &str) -> Self {
        let path = normalize(path);
        if path == "/" {
            Self::Home
        } else if path == "/launch-week/x" {
            Self::LaunchWeekX
        } else if path.contains("/launch-week") {
            Self::LaunchWeek
        } else if path == "/ga-week" {
            Self::GaWeek
        } else {
            Self::Standard
        }
    }

    /// Routes that belong to a launch-week style event.
    pub fn is_launch_week_family(self) -> bool {
        matches!(self, Self::LaunchWeek | Self::LaunchWeekX | Self::GaWeek)
    }

    /// Routes whose path sits under `/launch-week`.
    pub fn is_launch_week_route(self) -> bool {
        matches!(self, Self::LaunchWeek | Self::LaunchWeekX)
    }

    /// Event pages render their own sticky subnav under the header, so the
    /// header itself must not stick.
    pub fn has_sticky_subnav(self) -> bool {
        self.is_launch_week_family()
    }

    pub fn is_home(self) -> bool {
        self == Self::Home
    }
}

// Drops query/fragment and a trailing slash so `/ga-week/?ref=x` matches.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}
