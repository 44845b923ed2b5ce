//! Console rendering of a [`CheckReport`].
//!
//! Output for a project with only the Android file in place:
//!
//! ```text
//! 🔥 Firebase Configuration Checker
//! ==================================================
//!
//! 📱 Android Configuration:
//! ✅ google-services.json found: /work/app/android/app/google-services.json
//!    Project ID: tastesmoke-1234
//!
//! 🍎 iOS Configuration:
//! ❌ GoogleService-Info.plist NOT FOUND: /work/app/ios/Runner/GoogleService-Info.plist
//!
//! 📋 How to add it:
//! 1. Open the Firebase Console: https://console.firebase.google.com
//! ...
//! 6. Put the file at ios/Runner/GoogleService-Info.plist
//!
//! ==================================================
//! ⚠️  Firebase configuration files are missing
//! ```
//!
//! Rendering is a pure function of the report and settings, so two runs over
//! an unchanged tree print identical bytes.

use std::io::{self, Write};

use crate::domain::check::{CheckReport, ConfigFileCheck, ConfigTarget};
use crate::domain::settings::Settings;

const TITLE: &str = "🔥 Firebase Configuration Checker";
const RULE_WIDTH: usize = 50;

/// Writes the full report for `report` to `out`.
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn render_report<W: Write>(
    report: &CheckReport,
    settings: &Settings,
    out: &mut W,
) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(out, "{TITLE}")?;
    writeln!(out, "{rule}")?;

    for check in report.checks() {
        writeln!(out)?;
        render_check(check, out)?;
        if check.target == ConfigTarget::Ios && !check.exists {
            writeln!(out)?;
            render_ios_instructions(settings, out)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{rule}")?;
    if report.all_present() {
        writeln!(out, "🎉 All Firebase configuration files found!")?;
    } else {
        writeln!(out, "⚠️  Firebase configuration files are missing")?;
    }
    Ok(())
}

fn render_check<W: Write>(check: &ConfigFileCheck, out: &mut W) -> io::Result<()> {
    let target = check.target;
    writeln!(out, "{}", target.heading())?;

    if !check.exists {
        return writeln!(
            out,
            "❌ {} NOT FOUND: {}",
            target.file_name(),
            check.path.display()
        );
    }

    writeln!(out, "✅ {} found: {}", target.file_name(), check.path.display())?;
    if let Some(id) = &check.parsed_field {
        writeln!(out, "   Project ID: {id}")?;
    }
    if let Some(err) = &check.parse_error {
        writeln!(out, "   ⚠️  Failed to read file: {err}")?;
    }
    Ok(())
}

/// The six steps for downloading `GoogleService-Info.plist`.
///
/// The wording is English, like the rest of the report; only the project
/// name, bundle ID and console URL come from settings.
fn render_ios_instructions<W: Write>(settings: &Settings, out: &mut W) -> io::Result<()> {
    let project = &settings.project;
    let ios = ConfigTarget::Ios;

    writeln!(out, "📋 How to add it:")?;
    writeln!(out, "1. Open the Firebase Console: {}", project.console_url)?;
    writeln!(out, "2. Select the {} project", project.name)?;
    writeln!(out, "3. Project settings → Your apps")?;
    writeln!(out, "4. Add an iOS app with Bundle ID: {}", project.ios_bundle_id)?;
    writeln!(out, "5. Download {}", ios.file_name())?;
    writeln!(out, "6. Put the file at {}", ios.display_relative())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn render(report: &CheckReport) -> String {
        let mut buf = Vec::new();
        render_report(report, &Settings::default(), &mut buf).expect("Vec writer never fails");
        String::from_utf8(buf).expect("report is UTF-8")
    }

    fn report(android: ConfigFileCheck, ios_exists: bool) -> CheckReport {
        let ios_path = PathBuf::from("/proj/ios/Runner/GoogleService-Info.plist");
        let ios = if ios_exists {
            ConfigFileCheck::found(ConfigTarget::Ios, ios_path)
        } else {
            ConfigFileCheck::missing(ConfigTarget::Ios, ios_path)
        };
        CheckReport { android, ios }
    }

    fn android_path() -> PathBuf {
        PathBuf::from("/proj/android/app/google-services.json")
    }

    const INSTRUCTIONS: &str = "📋 How to add it:
1. Open the Firebase Console: https://console.firebase.google.com
2. Select the TasteSmoke project
3. Project settings → Your apps
4. Add an iOS app with Bundle ID: com.example.tastesmoke_flutter
5. Download GoogleService-Info.plist
6. Put the file at ios/Runner/GoogleService-Info.plist
";

    #[test]
    fn test_both_missing_renders_full_report() {
        // Arrange
        let r = report(
            ConfigFileCheck::missing(ConfigTarget::Android, android_path()),
            false,
        );

        // Act
        let text = render(&r);

        // Assert
        let expected = format!(
            "🔥 Firebase Configuration Checker
==================================================

📱 Android Configuration:
❌ google-services.json NOT FOUND: /proj/android/app/google-services.json

🍎 iOS Configuration:
❌ GoogleService-Info.plist NOT FOUND: /proj/ios/Runner/GoogleService-Info.plist

{INSTRUCTIONS}
==================================================
⚠️  Firebase configuration files are missing
"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_both_present_renders_project_id_and_success() {
        let r = report(
            ConfigFileCheck::found(ConfigTarget::Android, android_path())
                .with_parsed_field("tastesmoke-1234".to_string()),
            true,
        );

        let text = render(&r);

        assert!(text.contains("✅ google-services.json found: /proj/android/app/google-services.json\n"));
        assert!(text.contains("   Project ID: tastesmoke-1234\n"));
        assert!(text.contains("✅ GoogleService-Info.plist found: "));
        assert!(!text.contains("How to add it"));
        assert!(text.ends_with("🎉 All Firebase configuration files found!\n"));
    }

    #[test]
    fn test_parse_error_renders_warning_instead_of_project_id() {
        let r = report(
            ConfigFileCheck::found(ConfigTarget::Android, android_path())
                .with_parse_error("invalid JSON: EOF while parsing".to_string()),
            true,
        );

        let text = render(&r);

        assert!(text.contains("   ⚠️  Failed to read file: invalid JSON: EOF while parsing\n"));
        assert!(!text.contains("Project ID"));
        // Existence alone decides the summary line
        assert!(text.ends_with("🎉 All Firebase configuration files found!\n"));
    }

    #[test]
    fn test_instructions_appear_only_when_ios_file_missing() {
        let android = ConfigFileCheck::found(ConfigTarget::Android, android_path())
            .with_parsed_field("p".to_string());

        let missing = render(&report(android.clone(), false));
        assert!(missing.contains(INSTRUCTIONS));

        let present = render(&report(android, true));
        assert!(!present.contains("📋"));
    }

    #[test]
    fn test_instructions_use_custom_settings() {
        // Arrange
        let mut settings = Settings::default();
        settings.project.name = "Smokehouse".to_string();
        settings.project.ios_bundle_id = "dev.smokehouse.app".to_string();
        let r = report(
            ConfigFileCheck::missing(ConfigTarget::Android, android_path()),
            false,
        );

        // Act
        let mut buf = Vec::new();
        render_report(&r, &settings, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        // Assert
        assert!(text.contains("2. Select the Smokehouse project\n"));
        assert!(text.contains("4. Add an iOS app with Bundle ID: dev.smokehouse.app\n"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let r = report(
            ConfigFileCheck::found(ConfigTarget::Android, android_path())
                .with_parsed_field("x".to_string()),
            false,
        );
        assert_eq!(render(&r), render(&r));
    }
}
