const ICON_REPOSITORY: &str = "https://gcdn.thunderstore.io/live/repository/icons";
const PACKAGE_API: &str = "https://thunderstore.io/api/experimental/package";

/// Remote PNG icon for a plugin. The URL is only built here, never fetched.
pub fn icon_asset_url(ident: &str) -> String {
    format!("{}/{}.png", ICON_REPOSITORY, ident)
}

/// Thunderstore package endpoint a plugin's `api_url` points at.
pub fn package_api_url(namespace: &str, name: &str) -> String {
    format!("{}/{}/{}", PACKAGE_API, namespace, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_api_url() {
        assert_eq!(
            package_api_url("BepInEx", "BepInExPack"),
            "https://thunderstore.io/api/experimental/package/BepInEx/BepInExPack"
        );
    }
}
