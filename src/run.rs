mod cli;
mod format;

pub(crate) use cli::{as_cli, user_message};
