mod content;
pub use content::ContentPage;

mod home;
pub use home::Home;

mod launch_week;
pub use launch_week::LaunchWeek;
