use dotenvy::dotenv;
use std::env;

const DEFAULT_BANNER_URL: &str = "https://imagedelivery.net/zATaYcXRip-iTD7KY4rWYw/40568403-42c4-4495-ab11-14318ee23300/public";

pub struct Config {
    pub port: u16,
    pub banner_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let port = match env::var("BLOCKPARTY_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let banner_url = match env::var("BLOCKPARTY_BANNER_URL") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => DEFAULT_BANNER_URL.to_string(),
        };

        Self { port, banner_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            banner_url: DEFAULT_BANNER_URL.to_string(),
        }
    }
}
