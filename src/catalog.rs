//! Tweak catalog — descriptors, backend actions, and the built-in tweak set
//!
//! A [`Tweak`] binds a stable id and presentation strings to the ordered list
//! of backend [`Action`]s that realize it. Which handler runs for a given
//! tweak is resolved here, at catalog construction, as plain data; nothing is
//! dispatched by name at runtime.
//!
//! # Invariants
//!
//! - Tweak ids are unique within a catalog ([`Catalog::new`] enforces this).
//! - Catalog order is stable after construction and defines execution order.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::{Result, TweakError};
use crate::types::{Category, ConfigScope, Preset, TweakKind};

/// Stable identifier for every built-in tweak.
///
/// Declaration order matches catalog order, so ordered id collections
/// (`BTreeSet<TweakId>`) iterate the same way the catalog does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Serialize, Deserialize, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TweakId {
    PurgeTempFiles,
    DisableTelemetry,
    DisableActivityHistory,
    DisableGameDvr,
    DisableHibernation,
    DisableLocation,
    DiskCleanup,
    CloudflareDns,
    DisableStickyKeys,
    DisableBackgroundApps,
    DisableSuggestions,
    DisableLockScreen,
    DisableFaxXps,
    NtfsTuning,
    DisableNotifications,
    DebloatEdge,
    DarkTheme,
    DisableBingSearch,
    DisableSnapAssist,
    DisableMouseAcceleration,
    ShowFileExtensions,
    ShowHiddenFiles,
    HideTaskView,
    HideWidgets,
}

/// Typed data for a persistent configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegData {
    /// 32-bit integer value (REG_DWORD).
    Dword(u32),
    /// String value (REG_SZ).
    Sz(&'static str),
}

impl std::fmt::Display for RegData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegData::Dword(v) => write!(f, "{}", v),
            RegData::Sz(s) => write!(f, "{}", s),
        }
    }
}

/// One primitive backend invocation.
///
/// The two variants mirror the two operations of
/// [`ActionBackend`](crate::backend::ActionBackend): a persistent value write
/// and an external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Upsert a value in the host configuration store.
    SetValue {
        scope: ConfigScope,
        path: &'static str,
        name: &'static str,
        data: RegData,
    },
    /// Run an external command, capturing its output.
    RunCommand { command: &'static str },
}

impl Action {
    /// Short human-readable description, used in audit log messages.
    pub fn describe(&self) -> String {
        match self {
            Action::SetValue {
                scope,
                path,
                name,
                data,
            } => format!("{}: {}\\{} -> {}", scope, path, name, data),
            Action::RunCommand { command } => command.to_string(),
        }
    }
}

/// The unconditional best-effort backup step the engine performs before any
/// batch. Deliberately not a catalog entry: a run creates exactly one restore
/// point, whatever the selection.
pub fn restore_point_action() -> Action {
    Action::RunCommand {
        command: "Checkpoint-Computer -Description 'TweakTui_Backup' -RestorePointType 'MODIFY_SETTINGS'",
    }
}

/// A single catalog entry: one named, optional configuration change.
#[derive(Debug, Clone)]
pub struct Tweak {
    pub id: TweakId,
    /// Display name shown in the catalog list.
    pub name: &'static str,
    /// One-line description for the detail panel.
    pub description: &'static str,
    /// Underlying mechanism, for the technically curious.
    pub technical: &'static str,
    pub category: Category,
    pub kind: TweakKind,
    /// Presets this tweak belongs to.
    pub presets: &'static [Preset],
    /// Backend actions, applied in order.
    pub actions: Vec<Action>,
}

impl Tweak {
    /// Whether this tweak is part of the given preset.
    pub fn in_preset(&self, preset: Preset) -> bool {
        self.presets.contains(&preset)
    }
}

/// Ordered, read-only collection of tweaks.
///
/// Constructed once at process start; the stored order is the execution
/// order for every batch.
#[derive(Debug, Clone)]
pub struct Catalog {
    tweaks: Vec<Tweak>,
}

impl Catalog {
    /// Build a catalog from an ordered tweak list, rejecting duplicate ids.
    pub fn new(tweaks: Vec<Tweak>) -> Result<Self> {
        let mut seen = std::collections::BTreeSet::new();
        for tweak in &tweaks {
            if !seen.insert(tweak.id) {
                return Err(TweakError::state(format!(
                    "duplicate tweak id in catalog: {}",
                    tweak.id
                )));
            }
        }
        Ok(Self { tweaks })
    }

    /// All tweaks in catalog order.
    pub fn all(&self) -> &[Tweak] {
        &self.tweaks
    }

    /// Look up a tweak by id.
    pub fn get(&self, id: TweakId) -> Result<&Tweak> {
        self.tweaks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| TweakError::not_found(id.to_string()))
    }

    /// Tweaks of one category, preserving catalog order.
    pub fn by_category(&self, category: Category) -> Vec<&Tweak> {
        self.tweaks
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tweaks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweaks.is_empty()
    }

    /// The built-in catalog.
    pub fn builtin() -> Self {
        Self::new(builtin_tweaks()).expect("builtin catalog has unique ids")
    }
}

const STANDARD: &[Preset] = &[Preset::Standard];
const STANDARD_MINIMAL: &[Preset] = &[Preset::Standard, Preset::Minimal];
const NONE: &[Preset] = &[];

/// The full built-in tweak list.
///
/// Registry paths, value names, and command lines are the exact strings the
/// tweaks need on the host; do not reformat them.
fn builtin_tweaks() -> Vec<Tweak> {
    vec![
        Tweak {
            id: TweakId::PurgeTempFiles,
            name: "Purge Temp Files",
            description: "Deletes temporary junk files and flushes the DNS cache.",
            technical: "Remove-Item Temp",
            category: Category::Essentials,
            kind: TweakKind::OneShot,
            presets: STANDARD_MINIMAL,
            actions: vec![
                Action::RunCommand {
                    command: r"Remove-Item -Path $env:TEMP\* -Recurse -Force -ErrorAction SilentlyContinue",
                },
                Action::RunCommand {
                    command: r"Remove-Item -Path 'C:\Windows\Temp\*' -Recurse -Force -ErrorAction SilentlyContinue",
                },
                Action::RunCommand {
                    command: "Clear-DnsClientCache",
                },
            ],
        },
        Tweak {
            id: TweakId::DisableTelemetry,
            name: "Disable Telemetry",
            description: "Stops the diagnostics tracking service and disallows telemetry.",
            technical: "Stop DiagTrack",
            category: Category::Essentials,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::RunCommand {
                    command: "Stop-Service DiagTrack -Force -ErrorAction SilentlyContinue",
                },
                Action::RunCommand {
                    command: "Set-Service DiagTrack -StartupType Disabled",
                },
                Action::SetValue {
                    scope: ConfigScope::Machine,
                    path: r"SOFTWARE\Policies\Microsoft\Windows\DataCollection",
                    name: "AllowTelemetry",
                    data: RegData::Dword(0),
                },
            ],
        },
        Tweak {
            id: TweakId::DisableActivityHistory,
            name: "Disable Activity History",
            description: "Stops publishing user activity to the timeline.",
            technical: "PublishUserActivities=0",
            category: Category::Essentials,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![Action::SetValue {
                scope: ConfigScope::Machine,
                path: r"SOFTWARE\Policies\Microsoft\Windows\System",
                name: "PublishUserActivities",
                data: RegData::Dword(0),
            }],
        },
        Tweak {
            id: TweakId::DisableGameDvr,
            name: "Disable Game DVR",
            description: "Frees resources by turning off background game capture.",
            technical: "GameDVR_Enabled=0",
            category: Category::Essentials,
            kind: TweakKind::Toggle,
            presets: NONE,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\GameDVR",
                    name: "AppCaptureEnabled",
                    data: RegData::Dword(0),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"System\GameConfigStore",
                    name: "GameDVR_Enabled",
                    data: RegData::Dword(0),
                },
            ],
        },
        Tweak {
            id: TweakId::DisableHibernation,
            name: "Disable Hibernation",
            description: "Reclaims the hibernation file's disk space.",
            technical: "powercfg -h off",
            category: Category::Essentials,
            kind: TweakKind::Toggle,
            presets: NONE,
            actions: vec![Action::RunCommand {
                command: "powercfg -h off",
            }],
        },
        Tweak {
            id: TweakId::DisableLocation,
            name: "Disable Location Access",
            description: "Denies geolocation access system-wide.",
            technical: "SensorPermissionState=0",
            category: Category::Essentials,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![Action::SetValue {
                scope: ConfigScope::Machine,
                path: r"SOFTWARE\Microsoft\Windows\CurrentVersion\CapabilityAccessManager\ConsentStore\location",
                name: "Value",
                data: RegData::Sz("Deny"),
            }],
        },
        Tweak {
            id: TweakId::DiskCleanup,
            name: "Run Disk Cleanup",
            description: "Launches the disk cleanup utility.",
            technical: "cleanmgr.exe",
            category: Category::Essentials,
            kind: TweakKind::OneShot,
            presets: STANDARD_MINIMAL,
            actions: vec![Action::RunCommand {
                // Start-Process keeps the batch moving; cleanmgr is interactive.
                command: "Start-Process cleanmgr.exe",
            }],
        },
        Tweak {
            id: TweakId::CloudflareDns,
            name: "Cloudflare DNS (1.1.1.1)",
            description: "Points active network adapters at a faster, private DNS.",
            technical: "Set-DnsClientServerAddress",
            category: Category::Network,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![Action::RunCommand {
                command: "Get-NetAdapter | Where-Object Status -eq 'Up' | Set-DnsClientServerAddress -ServerAddresses 1.1.1.1, 1.0.0.1",
            }],
        },
        Tweak {
            id: TweakId::DisableStickyKeys,
            name: "Disable Sticky Keys",
            description: "Stops the sticky keys prompt when Shift is pressed five times.",
            technical: "RegKey: StickyKeys",
            category: Category::Gaming,
            kind: TweakKind::Toggle,
            presets: STANDARD_MINIMAL,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Control Panel\Accessibility\StickyKeys",
                    name: "Flags",
                    data: RegData::Sz("506"),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Control Panel\Accessibility\Keyboard Response",
                    name: "Flags",
                    data: RegData::Sz("122"),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Control Panel\Accessibility\ToggleKeys",
                    name: "Flags",
                    data: RegData::Sz("58"),
                },
            ],
        },
        Tweak {
            id: TweakId::DisableBackgroundApps,
            name: "Disable Background Apps",
            description: "Keeps idle store apps from consuming RAM.",
            technical: "LetAppsRunInBackground=2",
            category: Category::Performance,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\BackgroundAccessApplications",
                    name: "GlobalUserDisabled",
                    data: RegData::Dword(1),
                },
                Action::SetValue {
                    scope: ConfigScope::Machine,
                    path: r"SOFTWARE\Policies\Microsoft\Windows\AppPrivacy",
                    name: "LetAppsRunInBackground",
                    data: RegData::Dword(2),
                },
            ],
        },
        Tweak {
            id: TweakId::DisableSuggestions,
            name: "Disable Content Suggestions",
            description: "Removes suggested content from Start and Settings.",
            technical: "ContentDeliveryManager",
            category: Category::Cleanup,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager",
                    name: "SystemPaneSuggestionsEnabled",
                    data: RegData::Dword(0),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager",
                    name: "SoftLandingEnabled",
                    data: RegData::Dword(0),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager",
                    name: "RotatingLockScreenEnabled",
                    data: RegData::Dword(0),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager",
                    name: "RotatingLockScreenOverlayEnabled",
                    data: RegData::Dword(0),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\ContentDeliveryManager",
                    name: "SubscribedContent-338387Enabled",
                    data: RegData::Dword(0),
                },
            ],
        },
        Tweak {
            id: TweakId::DisableLockScreen,
            name: "Disable Lock Screen",
            description: "Boots straight to the login prompt.",
            technical: "NoLockScreen=1",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: NONE,
            actions: vec![Action::SetValue {
                scope: ConfigScope::Machine,
                path: r"SOFTWARE\Policies\Microsoft\Windows\Personalization",
                name: "NoLockScreen",
                data: RegData::Dword(1),
            }],
        },
        Tweak {
            id: TweakId::DisableFaxXps,
            name: "Disable Fax/XPS Services",
            description: "Disables legacy print services and Xbox helpers.",
            technical: "Disable-WindowsOptionalFeature",
            category: Category::Cleanup,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::RunCommand {
                    command: "Stop-Service Spooler -Force -ErrorAction SilentlyContinue; Set-Service Spooler -StartupType Disabled",
                },
                Action::RunCommand {
                    command: "Stop-Service Fax -Force -ErrorAction SilentlyContinue; Set-Service Fax -StartupType Disabled",
                },
                Action::RunCommand {
                    command: "Stop-Service XblAuthManager -Force -ErrorAction SilentlyContinue; Set-Service XblAuthManager -StartupType Disabled",
                },
                Action::RunCommand {
                    command: "Stop-Service XblGameSave -Force -ErrorAction SilentlyContinue; Set-Service XblGameSave -StartupType Disabled",
                },
                Action::RunCommand {
                    command: "Stop-Service XboxNetApiSvc -Force -ErrorAction SilentlyContinue; Set-Service XboxNetApiSvc -StartupType Disabled",
                },
                Action::RunCommand {
                    command: "Stop-Service XboxGipSvc -Force -ErrorAction SilentlyContinue; Set-Service XboxGipSvc -StartupType Disabled",
                },
                Action::RunCommand {
                    command: "Disable-WindowsOptionalFeature -Online -FeatureName Printing-PrintToPDFServices-Features -NoRestart",
                },
                Action::RunCommand {
                    command: "Disable-WindowsOptionalFeature -Online -FeatureName Printing-XPSServices-Features -NoRestart",
                },
            ],
        },
        Tweak {
            id: TweakId::NtfsTuning,
            name: "NTFS Tuning",
            description: "Skips last-access stamping and paging file encryption.",
            technical: "fsutil behavior",
            category: Category::Performance,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::RunCommand {
                    command: "fsutil behavior set disablelastaccess 1",
                },
                Action::RunCommand {
                    command: "fsutil behavior set encryptpagingfile 0",
                },
            ],
        },
        Tweak {
            id: TweakId::DisableNotifications,
            name: "Disable Notifications",
            description: "Silences toast notifications.",
            technical: "ToastEnabled=0",
            category: Category::Privacy,
            kind: TweakKind::Toggle,
            presets: NONE,
            actions: vec![Action::SetValue {
                scope: ConfigScope::User,
                path: r"Software\Microsoft\Windows\CurrentVersion\PushNotifications",
                name: "ToastEnabled",
                data: RegData::Dword(0),
            }],
        },
        Tweak {
            id: TweakId::DebloatEdge,
            name: "Debloat Edge",
            description: "Removes the Edge sidebar and startup preloading.",
            technical: "RegKey: Edge Policies",
            category: Category::Cleanup,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::Machine,
                    path: r"SOFTWARE\Policies\Microsoft\Edge",
                    name: "HubsSidebarEnabled",
                    data: RegData::Dword(0),
                },
                Action::SetValue {
                    scope: ConfigScope::Machine,
                    path: r"SOFTWARE\Policies\Microsoft\Edge",
                    name: "StartupBoostEnabled",
                    data: RegData::Dword(0),
                },
            ],
        },
        Tweak {
            id: TweakId::DarkTheme,
            name: "Dark Theme",
            description: "Switches apps and system chrome to dark mode.",
            technical: "AppsUseLightTheme=0",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
                    name: "AppsUseLightTheme",
                    data: RegData::Dword(0),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
                    name: "SystemUsesLightTheme",
                    data: RegData::Dword(0),
                },
            ],
        },
        Tweak {
            id: TweakId::DisableBingSearch,
            name: "Disable Bing in Search",
            description: "Keeps web results out of the Start search box.",
            technical: "DisableSearchBoxSuggestions",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![Action::SetValue {
                scope: ConfigScope::User,
                path: r"Software\Policies\Microsoft\Windows\Explorer",
                name: "DisableSearchBoxSuggestions",
                data: RegData::Dword(1),
            }],
        },
        Tweak {
            id: TweakId::DisableSnapAssist,
            name: "Disable Snap Assist",
            description: "Turns off automatic window arrangement.",
            technical: "WindowArrangementActive",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![Action::SetValue {
                scope: ConfigScope::User,
                path: r"Control Panel\Desktop",
                name: "WindowArrangementActive",
                data: RegData::Sz("0"),
            }],
        },
        Tweak {
            id: TweakId::DisableMouseAcceleration,
            name: "Disable Mouse Acceleration",
            description: "Raw pointer precision, no enhancement curve.",
            technical: "MouseSpeed",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: NONE,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Control Panel\Mouse",
                    name: "MouseSpeed",
                    data: RegData::Sz("0"),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Control Panel\Mouse",
                    name: "MouseThreshold1",
                    data: RegData::Sz("0"),
                },
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Control Panel\Mouse",
                    name: "MouseThreshold2",
                    data: RegData::Sz("0"),
                },
            ],
        },
        Tweak {
            id: TweakId::ShowFileExtensions,
            name: "Show File Extensions",
            description: "Always display .txt, .exe and friends.",
            technical: "HideFileExt=0",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: STANDARD,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\Explorer\Advanced",
                    name: "HideFileExt",
                    data: RegData::Dword(0),
                },
                // Explorer restart makes the change visible immediately.
                Action::RunCommand {
                    command: "Get-Process explorer | Stop-Process",
                },
            ],
        },
        Tweak {
            id: TweakId::ShowHiddenFiles,
            name: "Show Hidden Files",
            description: "Display hidden files and folders.",
            technical: "Hidden=1",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: NONE,
            actions: vec![
                Action::SetValue {
                    scope: ConfigScope::User,
                    path: r"Software\Microsoft\Windows\CurrentVersion\Explorer\Advanced",
                    name: "Hidden",
                    data: RegData::Dword(1),
                },
                Action::RunCommand {
                    command: "Get-Process explorer | Stop-Process",
                },
            ],
        },
        Tweak {
            id: TweakId::HideTaskView,
            name: "Hide Task View Button",
            description: "Removes the task view button from the taskbar.",
            technical: "ShowTaskViewButton",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: STANDARD_MINIMAL,
            actions: vec![Action::SetValue {
                scope: ConfigScope::User,
                path: r"Software\Microsoft\Windows\CurrentVersion\Explorer\Advanced",
                name: "ShowTaskViewButton",
                data: RegData::Dword(0),
            }],
        },
        Tweak {
            id: TweakId::HideWidgets,
            name: "Hide Widgets Button",
            description: "Removes the widgets button from the taskbar.",
            technical: "TaskbarDa",
            category: Category::Personalization,
            kind: TweakKind::Toggle,
            presets: STANDARD_MINIMAL,
            actions: vec![Action::SetValue {
                scope: ConfigScope::User,
                path: r"Software\Microsoft\Windows\CurrentVersion\Explorer\Advanced",
                name: "TaskbarDa",
                data: RegData::Dword(0),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_nonempty() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 24);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::builtin();
        let mut tweaks = catalog.all().to_vec();
        tweaks.push(tweaks[0].clone());
        assert!(matches!(
            Catalog::new(tweaks),
            Err(TweakError::State(_))
        ));
    }

    #[test]
    fn test_every_tweak_has_actions() {
        for tweak in Catalog::builtin().all() {
            assert!(!tweak.actions.is_empty(), "{} has no actions", tweak.id);
        }
    }

    #[test]
    fn test_tweak_id_string_forms() {
        assert_eq!(TweakId::PurgeTempFiles.to_string(), "purge-temp-files");
        assert_eq!(TweakId::DisableGameDvr.to_string(), "disable-game-dvr");
        assert_eq!(
            "ntfs-tuning".parse::<TweakId>().unwrap(),
            TweakId::NtfsTuning
        );
    }

    #[test]
    fn test_restore_point_is_not_a_catalog_entry() {
        let restore = restore_point_action();
        for tweak in Catalog::builtin().all() {
            assert!(!tweak.actions.contains(&restore));
        }
    }

    #[test]
    fn test_action_describe() {
        let action = Action::SetValue {
            scope: ConfigScope::User,
            path: r"Control Panel\Desktop",
            name: "WindowArrangementActive",
            data: RegData::Sz("0"),
        };
        assert_eq!(
            action.describe(),
            r"user: Control Panel\Desktop\WindowArrangementActive -> 0"
        );
    }
}
