//! Print the services showcase

use anyhow::Result;
use std::fmt::Write as _;

use crate::config::SiteConfig;
use crate::content::Service;
use crate::Folio;

/// Print the configured services catalogue
pub fn run(folio: &Folio, json: bool) -> Result<()> {
    let services = folio.config.services();

    if json {
        println!("{}", serde_json::to_string_pretty(&services)?);
        return Ok(());
    }

    print!("{}", render_services(&services, &folio.config));
    Ok(())
}

/// Render the catalogue as terminal text under the site header
pub fn render_services(services: &[Service], config: &SiteConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", config.header());
    let _ = writeln!(out, "Services ({}):", services.len());
    for service in services {
        let _ = writeln!(out, "  {}", service.title);
        let _ = writeln!(out, "    {}", service.description);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_services_with_header() {
        let config = SiteConfig {
            title: "Studio".to_string(),
            subtitle: "Apps and sites".to_string(),
            ..Default::default()
        };
        let services = config.services();

        let text = render_services(&services, &config);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Studio: Apps and sites (by John Doe)"));
        assert_eq!(lines.next(), Some("Services (9):"));
        assert_eq!(lines.next(), Some(format!("  {}", services[0].title).as_str()));
    }
}
