pub mod launchboard_env;
