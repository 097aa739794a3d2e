#![allow(dead_code)]

use katabasis_lib::models::collection::Collection;
use katabasis_lib::models::game::Game;
use katabasis_lib::models::plugin::Plugin;
use katabasis_lib::utils::icon::package_api_url;

/// A Thunderstore plugin as the import flow would build it.
pub fn thunderstore_plugin(namespace: &str, name: &str) -> Plugin {
    Plugin::new(
        format!("{}-{}", namespace, name),
        name,
        "thunderstore",
        package_api_url(namespace, name),
    )
    .with_version("1.0.0")
}

/// A Lethal Company collection holding BepInExPack, LateCompany and MoreCompany, in that order.
pub fn sample_collection() -> Collection {
    let mut collection = Collection::for_game("Friday Night Run", Game::LethalCompany, "v50");
    collection.add_plugin(thunderstore_plugin("BepInEx", "BepInExPack").with_enabled(true));
    collection.add_plugin(thunderstore_plugin("anormaltwig", "LateCompany"));
    collection.add_plugin(thunderstore_plugin("notnotnotswipez", "MoreCompany").with_enabled(true));
    collection
}
