use serde::Serialize;

/// Metadata extracted from one APK.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionResult {
    pub package_name: String,
    pub version_code: String,
    pub version_name: String,
    pub app_name: String,
    /// Path of the launcher icon inside the archive.
    pub icon_path: Option<String>,
    /// In manifest order, duplicates included.
    pub permissions: Vec<String>,
    pub launchable_activity: Option<String>,
    #[serde(skip)]
    pub icon_bytes: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_bytes_are_not_serialized() {
        let result = InspectionResult {
            package_name: "com.example.app".to_string(),
            version_code: "12".to_string(),
            version_name: "1.2.0".to_string(),
            app_name: "Example App".to_string(),
            icon_path: Some("res/icon.png".to_string()),
            permissions: vec!["android.permission.INTERNET".to_string()],
            launchable_activity: None,
            icon_bytes: Some(vec![0x89, b'P', b'N', b'G']),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["package_name"], "com.example.app");
        assert_eq!(json["icon_path"], "res/icon.png");
        assert!(json["launchable_activity"].is_null());
        assert!(json.get("icon_bytes").is_none());
    }
}
