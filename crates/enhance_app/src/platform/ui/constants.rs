use std::time::Duration;

pub const RENDER_TICK: Duration = Duration::from_millis(75);

pub const BAR_WIDTH: usize = 30;
pub const FILE_NAME_WIDTH: usize = 28;

pub const HELP_TEXT: &str = "\
Commands:
  overview | jobs | cache   switch tab
  details [ID]              open job details (full id or unique prefix)
  back                      return to the job table
  download ID               print the download URL of a completed job
  refresh                   poll the job list now
  quit                      exit";
