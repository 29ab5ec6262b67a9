use std::time::Duration;

use flagfig::{Configure, FlagfigError, Tags, Walker};

/// Root configuration for the demo app.
#[derive(Debug, Default)]
pub struct DemoConfig {
    pub verbose: bool,
    pub json: bool,
    pub server: ServerConfig,
    pub display: DisplayConfig,
}

impl Configure for DemoConfig {
    fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
        w.leaf("verbose", Tags::new().help("Enable verbose output."), &mut self.verbose)?;
        w.leaf(
            "json",
            Tags::new().help("Print the resolution report as JSON."),
            &mut self.json,
        )?;
        w.nested("server", &mut self.server)?;
        w.nested("display", &mut self.display)
    }
}

#[derive(Debug, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u32,
    pub timeout: Duration,
    pub allowed: Vec<String>,
}

impl Configure for ServerConfig {
    fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
        w.leaf(
            "host",
            Tags::new().default("127.0.0.1").help("Address to bind."),
            &mut self.host,
        )?;
        w.leaf(
            "port",
            Tags::new().default("8080").env("PORT").help("Port to listen on."),
            &mut self.port,
        )?;
        w.leaf(
            "timeout",
            Tags::new().default("30s").help("Request timeout."),
            &mut self.timeout,
        )?;
        w.leaf(
            "allowed",
            Tags::new().flag("allow").help("Comma-separated client allow list."),
            &mut self.allowed,
        )
    }
}

#[derive(Debug, Default)]
pub struct DisplayConfig {
    pub color: String,
    pub name: String,
}

impl Configure for DisplayConfig {
    fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
        w.leaf(
            "color",
            Tags::new().default("yellow").help("Greeting color."),
            &mut self.color,
        )?;
        w.leaf(
            "name",
            Tags::new().required().help("Who to greet."),
            &mut self.name,
        )
    }
}
