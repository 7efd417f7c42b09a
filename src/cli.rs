//! Command Line Interface (CLI) arguments.

use clap::Parser;

/// Rentalist command line interface
#[derive(Clone, Debug, Parser)]
pub struct CommandLineArgs {
    /// The IP address on which the server should listen
    #[arg(long, default_value = "0.0.0.0", env = "RENTALIST_HOST")]
    pub host: String,
    /// The port to which the server should bind
    #[arg(long, default_value_t = 8081, env = "RENTALIST_PORT")]
    pub port: u16,
    /// Path to the CSV file containing historical trip records
    #[arg(
        long,
        default_value = "resources/Divvy_Trips_2019_Q2",
        env = "RENTALIST_TRIPS_FILE"
    )]
    pub trips_file: String,
    /// URL of the GBFS station information feed
    #[arg(
        long,
        default_value = "https://gbfs.divvybikes.com/gbfs/en/station_information.json",
        env = "RENTALIST_STATION_INFO_URL"
    )]
    pub station_info_url: String,
    /// Shared secret expected as a bearer token on data routes. A placeholder
    /// for a real authentication mechanism.
    #[arg(long, default_value = "insecure-dev-token", env = "RENTALIST_API_TOKEN")]
    pub api_token: String,
    /// Flag indicating whether HTTPS should be used
    #[arg(long, default_value_t = false, env = "RENTALIST_HTTPS")]
    pub https: bool,
    /// Path to the certificate file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/rentalist/certs/cert.pem",
        env = "RENTALIST_CERT_FILE"
    )]
    pub cert_file: String,
    /// Path to the key file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/rentalist/certs/key.pem",
        env = "RENTALIST_KEY_FILE"
    )]
    pub key_file: String,
    /// Maximum time in seconds to wait for operations to complete upon receiving `ctrl+c` signal.
    #[arg(long, default_value_t = 60, env = "RENTALIST_SHUTDOWN_TIMEOUT")]
    pub graceful_shutdown_timeout: u64,
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}
