//! 短链公开地址解析
//!
//! 本地开发时前端和后端不在同一个 origin，需要直接使用后端地址；
//! 部署后前端 origin 上的路由规则会把短码路径转发给后端

use std::net::{Ipv4Addr, Ipv6Addr};

use url::{Host, Url};

use crate::config::ResolverConfig;
use crate::errors::{DashboardError, Result};

/// Builds the user-facing short URL for a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortUrlResolver {
    origin: Url,
    dev_backend_host: String,
    dev_backend_port: u16,
}

impl ShortUrlResolver {
    pub fn new(origin: &str, dev_backend_host: &str, dev_backend_port: u16) -> Result<Self> {
        let origin = Url::parse(origin)?;
        if origin.host().is_none() {
            return Err(DashboardError::config(format!(
                "resolver origin '{}' has no host",
                origin
            )));
        }
        Ok(Self {
            origin,
            dev_backend_host: dev_backend_host.to_string(),
            dev_backend_port,
        })
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self> {
        Self::new(
            &config.origin,
            &config.dev_backend_host,
            config.dev_backend_port,
        )
    }

    /// Whether the current origin is a loopback / development host.
    pub fn is_development(&self) -> bool {
        is_loopback_host(self.origin.host())
    }

    /// `http://<dev-host>:<dev-port>/<code>` on a loopback origin,
    /// `<origin>/<code>` everywhere else.
    pub fn resolve(&self, code: &str) -> String {
        let code = urlencoding::encode(code);
        if self.is_development() {
            format!(
                "http://{}:{}/{}",
                self.dev_backend_host, self.dev_backend_port, code
            )
        } else {
            format!("{}/{}", self.origin.origin().ascii_serialization(), code)
        }
    }
}

fn is_loopback_host(host: Option<Host<&str>>) -> bool {
    match host {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(ip)) => ip.is_loopback() || ip == Ipv4Addr::UNSPECIFIED,
        Some(Host::Ipv6(ip)) => ip.is_loopback() || ip == Ipv6Addr::UNSPECIFIED,
        None => false,
    }
}
