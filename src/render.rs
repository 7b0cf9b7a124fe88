//! Human-readable text rendering of lookup responses.
//!
//! These renderings are meant for logs and terminals, not for the wire.
//! The formats are stable:
//!
//! ```text
//! IP: 2601:647:4800:aaaa:bbbb:0000:0000:0000
//! Security: VPN: false proxy: false Tor: false relay: false
//! Location: Sunnyvale, California US
//! Network: COMCAST-7922 (AS7922)
//! Message: this is the message
//! ```

use crate::response::{Location, Network, Response, Security};
use std::fmt;

/// Render the security flags.
pub fn security(security: &Security) -> String {
    Rendered(security).to_string()
}

/// Render a location as `<city>, <region> <country_code>`.
pub fn location(location: &Location) -> String {
    Rendered(location).to_string()
}

/// Render a network as `<organization> (<as number>)`.
pub fn network(network: &Network) -> String {
    Rendered(network).to_string()
}

/// Render a full response, one newline-terminated line per section.
///
/// The `Message:` line is only present when the response carries a message.
pub fn response(response: &Response) -> String {
    Rendered(response).to_string()
}

/// Display adapter producing the canonical rendering of a response section.
///
/// Useful where a `Display` value is wanted without allocating, e.g.
/// `debug!(security = %Rendered(&resp.security))`.
#[derive(Debug)]
pub struct Rendered<'a, T>(pub &'a T);

impl<T> Clone for Rendered<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Rendered<'_, T> {}

impl fmt::Display for Rendered<'_, Security> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0;
        write!(
            f,
            "VPN: {} proxy: {} Tor: {} relay: {}",
            s.vpn, s.proxy, s.tor, s.relay
        )
    }
}

impl fmt::Display for Rendered<'_, Location> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = self.0;
        write!(f, "{}, {} {}", l.city, l.region, l.country_code)
    }
}

impl fmt::Display for Rendered<'_, Network> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0;
        write!(
            f,
            "{} ({})",
            n.autonomous_system_organization, n.autonomous_system_number
        )
    }
}

impl fmt::Display for Rendered<'_, Response> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "IP: {}", r.ip)?;
        writeln!(f, "Security: {}", Rendered(&r.security))?;
        writeln!(f, "Location: {}", Rendered(&r.location))?;
        writeln!(f, "Network: {}", Rendered(&r.network))?;
        if r.has_message() {
            writeln!(f, "Message: {}", r.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunnyvale() -> Response {
        Response {
            ip: "2601:647:4800:aaaa:bbbb:0000:0000:0000".to_string(),
            security: Security {
                vpn: false,
                proxy: false,
                tor: false,
                relay: false,
            },
            location: Location {
                city: "Sunnyvale".to_string(),
                region: "California".to_string(),
                country: "United States".to_string(),
                continent: "North America".to_string(),
                region_code: "CA".to_string(),
                country_code: "US".to_string(),
                continent_code: "NA".to_string(),
                latitude: "37.0".to_string(),
                longitude: "-122.0".to_string(),
                time_zone: "America/Los_Angeles".to_string(),
                locale_code: "en".to_string(),
                metro_code: "807".to_string(),
                is_in_european_union: false,
            },
            network: Network {
                network: "2601:647:4800::/48".to_string(),
                autonomous_system_number: "AS7922".to_string(),
                autonomous_system_organization: "COMCAST-7922".to_string(),
            },
            message: "this is the message".to_string(),
        }
    }

    #[test]
    fn test_render_response_with_message() {
        let want = "IP: 2601:647:4800:aaaa:bbbb:0000:0000:0000
Security: VPN: false proxy: false Tor: false relay: false
Location: Sunnyvale, California US
Network: COMCAST-7922 (AS7922)
Message: this is the message
";
        assert_eq!(response(&sunnyvale()), want);
    }

    #[test]
    fn test_render_response_without_message() {
        let mut r = sunnyvale();
        r.message.clear();

        let rendered = response(&r);
        assert_eq!(rendered.lines().count(), 4);
        assert!(!rendered.contains("Message:"));
        assert!(rendered.ends_with("Network: COMCAST-7922 (AS7922)\n"));
    }

    #[test]
    fn test_render_security_flags() {
        let s = Security {
            vpn: true,
            proxy: false,
            tor: true,
            relay: false,
        };
        assert_eq!(security(&s), "VPN: true proxy: false Tor: true relay: false");
    }

    #[test]
    fn test_render_sections() {
        let r = sunnyvale();
        assert_eq!(location(&r.location), "Sunnyvale, California US");
        assert_eq!(network(&r.network), "COMCAST-7922 (AS7922)");
    }

    #[test]
    fn test_render_empty_sections() {
        assert_eq!(location(&Location::default()), ",  ");
        assert_eq!(network(&Network::default()), " ()");
    }

    #[test]
    fn test_rendered_adapter_in_format() {
        let r = sunnyvale();
        let line = format!("[{}]", Rendered(&r.network));
        assert_eq!(line, "[COMCAST-7922 (AS7922)]");
    }

    #[test]
    fn test_rendered_adapter_is_copy() {
        fn assert_copy<T: Copy>(_: T) {}
        let r = sunnyvale();
        let rendered = Rendered(&r.security);
        assert_copy(rendered);
        assert_eq!(rendered.to_string(), security(&r.security));
    }
}
