//! Global product settings
//!
//! The settings the dashboard's configuration page edits, grouped in the
//! same four sections. The service serves the defaults below; the save
//! action is a logged stub, so nothing is persisted yet.

use serde::{Deserialize, Serialize};

use crate::domain::ReadingPlan;

/// All product settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub system: SystemSettings,

    #[serde(default)]
    pub whatsapp: WhatsAppSettings,

    #[serde(default)]
    pub bible: BibleSettings,

    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            system: SystemSettings::default(),
            whatsapp: WhatsAppSettings::default(),
            bible: BibleSettings::default(),
            notifications: NotificationSettings::default(),
        }
    }
}

/// General system settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemSettings {
    #[serde(default = "default_app_name")]
    pub app_name: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_max_users")]
    pub max_users: u32,

    #[serde(default = "default_backup_interval")]
    pub backup_interval_hours: u32,

    #[serde(default = "default_debug_mode")]
    pub debug_mode: bool,
}

fn default_app_name() -> String {
    "VersoZap".to_string()
}

fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}

fn default_max_users() -> u32 {
    1000
}

fn default_backup_interval() -> u32 {
    24
}

fn default_debug_mode() -> bool {
    true
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            timezone: default_timezone(),
            max_users: default_max_users(),
            backup_interval_hours: default_backup_interval(),
            debug_mode: default_debug_mode(),
        }
    }
}

/// WhatsApp sender settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhatsAppSettings {
    #[serde(default = "default_sender_url")]
    pub sender_url: String,

    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_ms: u64,

    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    #[serde(default = "default_send_interval")]
    pub send_interval_secs: u64,

    #[serde(default = "default_enable_audio")]
    pub enable_audio: bool,

    #[serde(default = "default_enable_delivery_receipt")]
    pub enable_delivery_receipt: bool,
}

fn default_sender_url() -> String {
    "https://versozap-sender-v2-production.up.railway.app".to_string()
}

fn default_connection_timeout() -> u64 {
    30_000
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_send_interval() -> u64 {
    2
}

fn default_enable_audio() -> bool {
    true
}

fn default_enable_delivery_receipt() -> bool {
    true
}

impl Default for WhatsAppSettings {
    fn default() -> Self {
        Self {
            sender_url: default_sender_url(),
            connection_timeout_ms: default_connection_timeout(),
            retry_attempts: default_retry_attempts(),
            send_interval_secs: default_send_interval(),
            enable_audio: default_enable_audio(),
            enable_delivery_receipt: default_enable_delivery_receipt(),
        }
    }
}

/// Bible content settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BibleSettings {
    #[serde(default = "default_version")]
    pub default_version: String,

    #[serde(default)]
    pub default_plan: ReadingPlan,

    #[serde(default = "default_send_time")]
    pub default_send_time: String,

    pub external_bible_api: Option<String>,

    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
}

fn default_version() -> String {
    "ARC".to_string()
}

fn default_send_time() -> String {
    "08:00".to_string()
}

fn default_welcome_message() -> String {
    "🙏 Bem-vindo ao VersoZap! Você receberá versículos bíblicos diariamente. \
     Que Deus abençoe sua jornada de fé!"
        .to_string()
}

impl Default for BibleSettings {
    fn default() -> Self {
        Self {
            default_version: default_version(),
            default_plan: ReadingPlan::default(),
            default_send_time: default_send_time(),
            external_bible_api: None,
            welcome_message: default_welcome_message(),
        }
    }
}

/// Admin notification settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationSettings {
    #[serde(default = "default_admin_email")]
    pub admin_email: String,

    pub webhook_url: Option<String>,

    #[serde(default = "default_notify_on")]
    pub notify_new_user: bool,

    #[serde(default = "default_notify_on")]
    pub notify_system_error: bool,

    #[serde(default = "default_notify_on")]
    pub notify_whatsapp_disconnect: bool,

    #[serde(default)]
    pub notify_daily_stats: bool,
}

fn default_admin_email() -> String {
    "admin@versozap.com".to_string()
}

fn default_notify_on() -> bool {
    true
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            webhook_url: None,
            notify_new_user: default_notify_on(),
            notify_system_error: default_notify_on(),
            notify_whatsapp_disconnect: default_notify_on(),
            notify_daily_stats: false,
        }
    }
}

/// Section targeted by a settings save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    System,
    Whatsapp,
    Bible,
    Notifications,
}

impl SettingsSection {
    /// Parse a section name from a form payload
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "system" => Some(SettingsSection::System),
            "whatsapp" => Some(SettingsSection::Whatsapp),
            "bible" => Some(SettingsSection::Bible),
            "notifications" => Some(SettingsSection::Notifications),
            _ => None,
        }
    }
}

impl std::fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsSection::System => write!(f, "system"),
            SettingsSection::Whatsapp => write!(f, "whatsapp"),
            SettingsSection::Bible => write!(f, "bible"),
            SettingsSection::Notifications => write!(f, "notifications"),
        }
    }
}
