//! `dsamentor onboard`: first-time setup.

use dsamentor_config::AppConfig;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_dir = AppConfig::config_dir();
    let config_path = AppConfig::config_path();

    println!("📚 DSA Mentor: First-Time Setup");
    println!("================================\n");

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)?;
        println!("✅ Created config directory: {}", config_dir.display());
    } else {
        println!("  Config directory exists: {}", config_dir.display());
    }

    if config_path.exists() {
        println!("\n⚠️  Config already exists at: {}", config_path.display());
        println!("   Edit it manually or delete and re-run onboard.\n");
    } else {
        std::fs::write(&config_path, AppConfig::default_toml())?;
        println!("✅ Created config.toml at: {}", config_path.display());
        println!("\n📝 Next steps:");
        println!("   1. The local tutor works offline with no further setup");
        println!("   2. For Gemini: set provider = \"gemini\" and export GEMINI_API_KEY");
        println!("   3. Run: dsamentor serve\n");
    }

    println!("🎉 Setup complete! Run `dsamentor chat` to start learning.\n");

    Ok(())
}
