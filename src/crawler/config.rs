//! # Crawler Configuration Module
//!
//! This module provides configuration options for the indexer, including
//! the HTTP fetch policy, summary and excerpt sizes, and the recursion
//! bounds. It uses a builder pattern for flexible configuration.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: The main configuration struct with crawler parameters
//! - `CrawlerConfigBuilder`: Builder pattern implementation for easier configuration
//!
//! ## Features
//!
//! - A bounded request timeout
//! - User-agent customization
//! - Relaxed TLS verification, on by default, for best-effort indexing
//! - Fanout and depth limits clamped to hard caps

use std::time::Duration;

/// Maximum number of discovered links followed from one page
pub const FANOUT_CAP: usize = 5;

/// Maximum recursion levels below the seed page
pub const DEPTH_CAP: u32 = 1;

/// Configuration for the crawler
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// User agent to use for requests
    pub user_agent: String,

    /// Timeout for a single fetch
    pub timeout: Duration,

    /// Skip server certificate and hostname verification
    pub accept_invalid_certs: bool,

    /// Number of tokens kept in a page summary
    pub summary_words: usize,

    /// Number of headings and paragraphs stored in the metadata excerpt
    pub excerpt_limit: usize,

    /// Number of discovered links followed during a recursive crawl
    pub max_links: usize,

    /// Recursion levels below the seed during a recursive crawl
    pub max_depth: u32,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
            timeout: Duration::from_secs(30),
            accept_invalid_certs: true,
            summary_words: 50,
            excerpt_limit: 5,
            max_links: FANOUT_CAP,
            max_depth: DEPTH_CAP,
        }
    }
}

/// Builder for CrawlerConfig
#[derive(Debug, Default)]
pub struct CrawlerConfigBuilder {
    config: CrawlerConfig,
}

impl CrawlerConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CrawlerConfig::default(),
        }
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the fetch timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set whether invalid certificates and hostnames are accepted
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.config.accept_invalid_certs = accept;
        self
    }

    /// Set the number of summary tokens
    pub fn summary_words(mut self, summary_words: usize) -> Self {
        self.config.summary_words = summary_words;
        self
    }

    /// Set the number of headings and paragraphs kept in metadata
    pub fn excerpt_limit(mut self, excerpt_limit: usize) -> Self {
        self.config.excerpt_limit = excerpt_limit;
        self
    }

    /// Set the number of links followed, at most `FANOUT_CAP`
    pub fn max_links(mut self, max_links: usize) -> Self {
        self.config.max_links = max_links.min(FANOUT_CAP);
        self
    }

    /// Set the recursion depth, at most `DEPTH_CAP`
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth.min(DEPTH_CAP);
        self
    }

    /// Build the configuration
    pub fn build(self) -> CrawlerConfig {
        self.config
    }
}

impl CrawlerConfig {
    /// Create a new builder
    pub fn builder() -> CrawlerConfigBuilder {
        CrawlerConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CrawlerConfig::default();
        assert_eq!(config.user_agent, "Mozilla/5.0");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.accept_invalid_certs);
        assert_eq!(config.summary_words, 50);
        assert_eq!(config.excerpt_limit, 5);
        assert_eq!(config.max_links, FANOUT_CAP);
        assert_eq!(config.max_depth, DEPTH_CAP);
    }

    #[test]
    fn test_builder_clamps_recursion_bounds() {
        let config = CrawlerConfig::builder()
            .max_links(50)
            .max_depth(3)
            .user_agent("linksurfer-test")
            .build();

        assert_eq!(config.max_links, FANOUT_CAP);
        assert_eq!(config.max_depth, DEPTH_CAP);
        assert_eq!(config.user_agent, "linksurfer-test");

        let config = CrawlerConfig::builder().max_links(2).max_depth(0).build();
        assert_eq!(config.max_links, 2);
        assert_eq!(config.max_depth, 0);
    }
}
