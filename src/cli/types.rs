use clap::Parser;
use std::collections::HashSet;

use digitalarkivet_mcp::archive::DEFAULT_API_BASE;

/// Norwegian Digital Archives MCP server
///
/// Exposes full-text search over transcribed archive documents as MCP tools on stdio:
/// - search_index: the whole transcription index
/// - reindeer_search_index: the reindeer administration archive (1898-2003)
#[derive(Parser, Debug)]
#[command(name = "digitalarkivet-mcp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable specific tools by name (comma-separated)
    ///
    /// Example: --tools search_index,reindeer_search_index
    ///
    /// If not specified, all tools are enabled.
    #[arg(long, value_delimiter = ',', conflicts_with = "tool")]
    pub tools: Option<Vec<String>>,

    /// Enable specific tool by name (can be specified multiple times)
    ///
    /// Example: --tool reindeer_search_index
    ///
    /// If not specified, all tools are enabled.
    #[arg(long = "tool", conflicts_with = "tools")]
    pub tool: Vec<String>,

    /// List available tool names and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Archive API host (scheme and host, no path)
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE, value_parser = parse_api_base)]
    pub api_base: String,
}

impl Cli {
    /// Get the set of enabled tool names
    ///
    /// Returns None if no filter specified (enable all tools)
    /// Returns Some(HashSet) if filter specified (enable only these tools)
    pub fn enabled_tools(&self) -> Option<HashSet<String>> {
        if let Some(tools) = &self.tools {
            return Some(tools.iter().cloned().collect());
        }

        if !self.tool.is_empty() {
            return Some(self.tool.iter().cloned().collect());
        }

        None
    }
}

fn parse_api_base(value: &str) -> Result<String, String> {
    let url = reqwest::Url::parse(value).map_err(|e| format!("invalid URL '{value}': {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim_end_matches('/').to_string()),
        other => Err(format!("unsupported scheme '{other}', expected http or https")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["digitalarkivet-mcp"]).unwrap();
        assert_eq!(cli.api_base, DEFAULT_API_BASE);
        assert!(cli.enabled_tools().is_none());
        assert!(!cli.list_tools);
    }

    #[test]
    fn comma_separated_tools() {
        let cli = Cli::try_parse_from([
            "digitalarkivet-mcp",
            "--tools",
            "search_index,reindeer_search_index",
        ])
        .unwrap();
        let enabled = cli.enabled_tools().unwrap();
        assert_eq!(enabled.len(), 2);
        assert!(enabled.contains("reindeer_search_index"));
    }

    #[test]
    fn repeated_tool_flag() {
        let cli =
            Cli::try_parse_from(["digitalarkivet-mcp", "--tool", "search_index"]).unwrap();
        assert_eq!(
            cli.enabled_tools(),
            Some(HashSet::from(["search_index".to_string()]))
        );
    }

    #[test]
    fn tool_and_tools_conflict() {
        assert!(
            Cli::try_parse_from([
                "digitalarkivet-mcp",
                "--tool",
                "search_index",
                "--tools",
                "search_index"
            ])
            .is_err()
        );
    }

    #[test]
    fn api_base_is_checked() {
        let cli =
            Cli::try_parse_from(["digitalarkivet-mcp", "--api-base", "http://localhost:8080/"])
                .unwrap();
        assert_eq!(cli.api_base, "http://localhost:8080");

        assert!(Cli::try_parse_from(["digitalarkivet-mcp", "--api-base", "ftp://x"]).is_err());
        assert!(Cli::try_parse_from(["digitalarkivet-mcp", "--api-base", "not a url"]).is_err());
    }
}
