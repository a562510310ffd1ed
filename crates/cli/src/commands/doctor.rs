//! `dsamentor doctor`: diagnose configuration and provider health.

use std::sync::Arc;

use dsamentor_config::AppConfig;
use dsamentor_knowledge::ExplanationCatalog;

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("🩺 DSA Mentor Doctor");
    println!("====================\n");

    let mut issues = 0;

    let config_path = AppConfig::config_path();
    if config_path.exists() {
        println!("  ✅ Config file found: {}", config_path.display());
    } else {
        println!("  ⚠️  No config file, using defaults (run `dsamentor onboard`)");
    }

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid (provider: {})", config.provider);
            config
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            println!("\n  ⚠️  1 issue(s) found. See above for details.");
            return Ok(());
        }
    };

    let catalog = Arc::new(ExplanationCatalog::builtin());
    println!(
        "  ✅ {} prepared explanations: {}",
        catalog.len(),
        catalog.titles().join(", ")
    );

    if config.provider == "gemini" {
        if config.has_api_key() {
            println!("  ✅ Gemini API key configured (model: {})", config.gemini.model);
        } else {
            println!("  ⚠️  Gemini selected but no API key; set GEMINI_API_KEY");
        }
    }

    let router = dsamentor_providers::build_from_config(&config, catalog);
    if router.default().is_none() {
        println!("  ❌ Unknown provider '{}'", config.provider);
        issues += 1;
    }

    for (name, health) in router.check_all().await {
        let is_default = name == router.default_name();
        let role = if is_default { "default" } else { "available" };
        match health {
            Ok(true) => println!("  ✅ Provider '{name}' ready ({role})"),
            Ok(false) if is_default => {
                println!("  ❌ Provider '{name}' not ready ({role})");
                issues += 1;
            }
            Ok(false) => println!("  ➖ Provider '{name}' not configured ({role})"),
            Err(e) => {
                println!("  ❌ Provider '{name}' failed health check: {e}");
                if is_default {
                    issues += 1;
                }
            }
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
    } else {
        println!("  ⚠️  {issues} issue(s) found. See above for details.");
    }

    Ok(())
}
