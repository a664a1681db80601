//! Integration tests for provider resolution and downloads.
//!
//! Every provider API is replaced by a wiremock server; the endpoint table
//! is pointed at it the same way `endpoints.toml` would.

use std::path::Path;

use jarfetch::{Downloader, Endpoints, Error, Flavor, ServerType};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn endpoints_for(server: &MockServer) -> Endpoints {
    let uri = server.uri();
    Endpoints {
        papermc: format!("{}/v2/projects", uri),
        getbukkit: format!("{}/getbukkit/craftbukkit", uri),
        undefined_creations: format!("{}/mirror/spigot", uri),
        bungeecord: format!("{}/ci/BungeeCord.jar", uri),
        purpur: format!("{}/v2/purpur", uri),
        leaf: format!("{}/v2/projects/leaf", uri),
        asp: format!("{}/asp", uri),
        pufferfish: format!("{}/job", uri),
        spigot_api: format!("{}/spiget/resources", uri),
        hangar_api: format!("{}/hangar/projects", uri),
        modrinth_api: format!("{}/modrinth/project", uri),
    }
}

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_jar(server: &MockServer, route: &str, content: &[u8], expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content.to_vec()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn read(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("should read downloaded file")
}

#[tokio::test]
async fn test_paper_picks_highest_build_regardless_of_order() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v2/projects/paper/versions/1.21.4",
        json!({"project_id": "paper", "version": "1.21.4", "builds": [3, 1, 2]}),
    )
    .await;
    mount_jar(
        &server,
        "/v2/projects/paper/versions/1.21.4/builds/3/downloads/paper-1.21.4-3.jar",
        b"paper build 3",
        1,
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.paper(temp_dir.path(), "1.21.4").await;

    assert!(result.is_success(), "download failed: {:?}", result.error);
    let file = result.file().unwrap();
    assert_eq!(file, temp_dir.path().join("paper.jar"));
    assert_eq!(read(file), b"paper build 3");
}

#[tokio::test]
async fn test_second_download_reuses_existing_file() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v2/projects/velocity/versions/3.4.0",
        json!({"builds": [10, 12, 11]}),
    )
    .await;
    // The artifact must be requested exactly once across both calls
    mount_jar(
        &server,
        "/v2/projects/velocity/versions/3.4.0/builds/12/downloads/velocity-3.4.0-12.jar",
        b"velocity",
        1,
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));

    let first = downloader.velocity(temp_dir.path(), "3.4.0").await;
    let second = downloader.velocity(temp_dir.path(), "3.4.0").await;

    assert!(first.is_success());
    assert!(second.is_success());
    assert_eq!(first.file, second.file);
    assert_eq!(read(second.file().unwrap()), b"velocity");
}

#[tokio::test]
async fn test_resolution_is_deterministic() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v2/projects/folia/versions/1.21.4",
        json!({"builds": [5, 9, 7]}),
    )
    .await;

    let downloader = Downloader::new(endpoints_for(&server));
    let first = downloader
        .resolve_runtime(Flavor::Folia, "1.21.4")
        .await
        .unwrap();
    let second = downloader
        .resolve_runtime(Flavor::Folia, "1.21.4")
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.file_name, "folia.jar");
    assert!(first.download_url.ends_with("/builds/9/downloads/folia-1.21.4-9.jar"));
}

#[tokio::test]
async fn test_unknown_version_fails_with_metadata_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/projects/paper/versions/0.0.1"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.paper(temp_dir.path(), "0.0.1").await;

    assert!(!result.is_success());
    assert!(result.file.is_none());
    let error = result.error.unwrap();
    assert!(error.contains("Failed to fetch metadata"), "{}", error);
    assert!(error.contains("/v2/projects/paper/versions/0.0.1"), "{}", error);
}

#[tokio::test]
async fn test_missing_builds_field_keeps_parse_message() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v2/projects/waterfall/versions/1.21",
        json!({"version": "1.21"}),
    )
    .await;

    let downloader = Downloader::new(endpoints_for(&server));
    let err = downloader
        .resolve_runtime(Flavor::Waterfall, "1.21")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Metadata { .. }));
    assert!(err.to_string().contains("builds"), "{}", err);
}

#[tokio::test]
async fn test_artifact_http_error_creates_no_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/purpur/1.21.1/latest/download"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.purpur(temp_dir.path(), "1.21.1").await;

    assert!(!result.is_success());
    assert!(result.file.is_none());
    assert!(result.error.unwrap().contains("Failed to download"));
    assert!(!temp_dir.path().join("Purpur-1.21.1.jar").exists());
}

#[tokio::test]
async fn test_empty_artifact_is_a_failure() {
    let server = MockServer::start().await;
    mount_jar(&server, "/mirror/spigot/spigot-1.21.4.jar", b"", 1).await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.spigot(temp_dir.path(), "1.21.4").await;

    assert!(!result.is_success());
    assert!(result.error.unwrap().contains("empty response body"));
    assert!(!temp_dir.path().join("spigot.jar").exists());
}

#[tokio::test]
async fn test_destination_folder_is_created() {
    let server = MockServer::start().await;
    mount_jar(&server, "/ci/BungeeCord.jar", b"bungee", 1).await;

    let temp_dir = TempDir::new().unwrap();
    let folder = temp_dir.path().join("proxy").join("bin");
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.bungeecord(&folder, "ignored").await;

    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(read(&folder.join("Bungeecord.jar")), b"bungee");
}

#[tokio::test]
async fn test_craftbukkit_from_static_mirror() {
    let server = MockServer::start().await;
    mount_jar(
        &server,
        "/getbukkit/craftbukkit/craftbukkit-1.20.1.jar",
        b"bukkit",
        1,
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.craftbukkit(temp_dir.path(), "1.20.1").await;

    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(read(result.file().unwrap()), b"bukkit");
}

#[tokio::test]
async fn test_leaf_build_index() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/v2/projects/leaf/versions/1.21.4",
        json!({"builds": [400, 512, 498]}),
    )
    .await;
    mount_jar(
        &server,
        "/v2/projects/leaf/versions/1.21.4/builds/512/downloads/leaf-1.21.4-512.jar",
        b"leaf",
        1,
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.leaf(temp_dir.path(), "1.21.4").await;

    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(
        result.file().unwrap(),
        temp_dir.path().join("leaf-1.21.4-512.jar")
    );
}

#[tokio::test]
async fn test_pufferfish_uses_first_artifact() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/job/Pufferfish-1.21/lastSuccessfulBuild/api/json",
        json!({
            "number": 87,
            "artifacts": [
                {"fileName": "pufferfish-paperclip-1.21.3.jar", "relativePath": "build/libs/pufferfish-paperclip-1.21.3.jar"},
                {"fileName": "pufferfish-api.jar", "relativePath": "api/build/libs/pufferfish-api.jar"}
            ]
        }),
    )
    .await;
    mount_jar(
        &server,
        "/job/Pufferfish-1.21/lastSuccessfulBuild/artifact/build/libs/pufferfish-paperclip-1.21.3.jar",
        b"pufferfish",
        1,
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.pufferfish(temp_dir.path(), "1.21").await;

    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(read(&temp_dir.path().join("PufferFish.jar")), b"pufferfish");
}

#[tokio::test]
async fn test_asp_downloads_server_file_by_id() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/asp/mcversion/1.21.4/latest",
        json!({
            "id": "2b5b3c0e-5a7e-4c1f-9d36-64a1c1c7f0aa",
            "files": [
                {"id": "0b7e1b4c-1111-4e5b-8f00-000000000001", "fileName": "asp-plugin-1.21.4.jar"},
                {"id": "0b7e1b4c-2222-4e5b-8f00-000000000002", "fileName": "asp-server-1.21.4.jar"},
                {"id": "0b7e1b4c-3333-4e5b-8f00-000000000003", "fileName": "asp-server-sources.jar"}
            ]
        }),
    )
    .await;
    mount_jar(
        &server,
        "/asp/2b5b3c0e-5a7e-4c1f-9d36-64a1c1c7f0aa/download/0b7e1b4c-2222-4e5b-8f00-000000000002",
        b"slime",
        1,
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.asp(temp_dir.path(), "1.21.4").await;

    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(
        read(&temp_dir.path().join("AdvancedSlimePaper.jar")),
        b"slime"
    );
}

#[tokio::test]
async fn test_asp_without_server_file_fails() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/asp/mcversion/1.21.4/latest",
        json!({"id": "release-1", "files": [{"id": "f1", "fileName": "asp-plugin.jar"}]}),
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader.asp(temp_dir.path(), "1.21.4").await;

    assert!(!result.is_success());
    assert!(result.error.unwrap().contains("no server file"));
}

#[tokio::test]
async fn test_spigot_plugin_name_and_download() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/spiget/resources/1234/",
        json!({"id": 1234, "name": "My: Cool Plugin!", "versions": [{"id": 40}, {"id": 42}]}),
    )
    .await;
    mount_jar(&server, "/spiget/resources/1234/download", b"cool", 1).await;

    let url = "https://www.spigotmc.org/resources/my-cool-plugin.1234/";
    let paper = ServerType::new("paper");
    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));

    let name = downloader.resolve_file_name(url, &paper).await.unwrap();
    assert_eq!(name, "My-42.jar");

    let result = downloader
        .download_plugin(temp_dir.path(), url, &paper)
        .await
        .unwrap();
    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(read(&temp_dir.path().join("My-42.jar")), b"cool");
}

#[tokio::test]
async fn test_hangar_plugin_for_paper_and_velocity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hangar/projects/ViaVersion/latestrelease"))
        .respond_with(ResponseTemplate::new(200).set_body_string("5.2.1\n"))
        .mount(&server)
        .await;
    mount_jar(
        &server,
        "/hangar/projects/ViaVersion/versions/5.2.1/PAPER/download",
        b"via paper",
        1,
    )
    .await;
    mount_jar(
        &server,
        "/hangar/projects/ViaVersion/versions/5.2.1/VELOCITY/download",
        b"via velocity",
        1,
    )
    .await;

    let url = "https://hangar.papermc.io/ViaVersion/ViaVersion";
    let downloader = Downloader::new(endpoints_for(&server));

    let paper_dir = TempDir::new().unwrap();
    let result = downloader
        .download_plugin(paper_dir.path(), url, &ServerType::new("paper"))
        .await
        .unwrap();
    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(
        read(&paper_dir.path().join("ViaVersion-5.2.1.jar")),
        b"via paper"
    );

    let proxy_dir = TempDir::new().unwrap();
    let result = downloader
        .download_plugin(
            proxy_dir.path(),
            url,
            &ServerType::new("velocity").with_proxy(),
        )
        .await
        .unwrap();
    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(
        read(&proxy_dir.path().join("ViaVersion-5.2.1.jar")),
        b"via velocity"
    );
}

#[tokio::test]
async fn test_modrinth_plugin_skips_snapshots_and_other_loaders() {
    let server = MockServer::start().await;
    let cdn = format!("{}/cdn", server.uri());
    mount_json(
        &server,
        "/modrinth/project/luckperms/version",
        json!([
            {"version_number": "5.5-snapshot", "game_versions": ["25w02a"], "loaders": ["paper"],
             "files": [{"filename": "LuckPerms-Snapshot.jar", "url": format!("{}/snapshot.jar", cdn)}]},
            {"version_number": "5.4-velocity", "game_versions": ["1.21.4"], "loaders": ["velocity"],
             "files": [{"filename": "LuckPerms-Velocity-5.4.jar", "url": format!("{}/velocity.jar", cdn)}]},
            {"version_number": "5.4-bukkit", "game_versions": ["1.21.4", "1.21.3"], "loaders": ["bukkit", "paper"],
             "files": [{"filename": "LuckPerms-Bukkit-5.4.jar", "url": format!("{}/bukkit.jar", cdn)}]}
        ]),
    )
    .await;
    mount_jar(&server, "/cdn/bukkit.jar", b"luckperms", 1).await;
    mount_jar(&server, "/cdn/snapshot.jar", b"snapshot", 0).await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader
        .download_plugin(
            temp_dir.path(),
            "https://modrinth.com/plugin/luckperms",
            &ServerType::new("paper"),
        )
        .await
        .unwrap();

    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(
        read(&temp_dir.path().join("LuckPerms-Bukkit-5.4.jar")),
        b"luckperms"
    );
}

#[tokio::test]
async fn test_modrinth_without_matching_loader_is_failed_result() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/modrinth/project/sodium/version",
        json!([
            {"version_number": "0.6", "game_versions": ["1.21.4"], "loaders": ["fabric"],
             "files": [{"filename": "sodium.jar", "url": "https://cdn.invalid/sodium.jar"}]}
        ]),
    )
    .await;

    let url = "https://modrinth.com/plugin/sodium";
    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));

    let result = downloader
        .download_plugin(temp_dir.path(), url, &ServerType::new("paper"))
        .await
        .unwrap();
    assert!(!result.is_success());
    assert!(result.error.unwrap().contains("No matching version"));

    let err = downloader
        .resolve_file_name(url, &ServerType::new("paper"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NoCompatibleVersion { .. }));

    let name = downloader
        .resolve_file_name(url, &ServerType::custom())
        .await
        .unwrap();
    assert_eq!(name, "sodium.jar");
}

#[tokio::test]
async fn test_modrinth_file_name_cannot_leave_folder() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/modrinth/project/sneaky/version",
        json!([
            {"version_number": "1.0", "game_versions": ["1.21.4"], "loaders": ["paper"],
             "files": [{"filename": "../escaped.jar", "url": format!("{}/cdn/sneaky.jar", server.uri())}]}
        ]),
    )
    .await;
    mount_jar(&server, "/cdn/sneaky.jar", b"sneaky", 0).await;

    let temp_dir = TempDir::new().unwrap();
    let plugins = temp_dir.path().join("plugins");
    let downloader = Downloader::new(endpoints_for(&server));
    let result = downloader
        .download_plugin(
            &plugins,
            "https://modrinth.com/plugin/sneaky",
            &ServerType::new("paper"),
        )
        .await
        .unwrap();

    assert!(!result.is_success());
    assert!(result.error.unwrap().contains("Invalid file name"));
    assert!(!temp_dir.path().join("escaped.jar").exists());
}

#[tokio::test]
async fn test_unsupported_plugin_host() {
    let downloader = Downloader::default();
    let temp_dir = TempDir::new().unwrap();
    let url = "https://dev.bukkit.org/projects/worldedit";

    let err = downloader
        .download_plugin(temp_dir.path(), url, &ServerType::new("paper"))
        .await
        .unwrap_err();
    assert!(matches!(&err, Error::UnsupportedSource(u) if u == url));
    assert!(err.is_input_error());

    let err = downloader
        .resolve_file_name(url, &ServerType::new("paper"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedSource(_)));
}

#[tokio::test]
async fn test_spawned_downloads_run_independently() {
    let server = MockServer::start().await;
    mount_jar(&server, "/v2/purpur/1.21.1/latest/download", b"purpur", 1).await;
    mount_jar(&server, "/ci/BungeeCord.jar", b"bungee", 1).await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));

    let purpur = downloader.spawn_runtime(
        Flavor::Purpur,
        temp_dir.path().to_path_buf(),
        "1.21.1".to_string(),
    );
    let bungee = downloader.spawn_runtime(
        Flavor::Bungeecord,
        temp_dir.path().to_path_buf(),
        "1.21.1".to_string(),
    );

    assert!(purpur.await.unwrap().is_success());
    assert!(bungee.await.unwrap().is_success());
    assert_eq!(read(&temp_dir.path().join("Purpur-1.21.1.jar")), b"purpur");
    assert_eq!(read(&temp_dir.path().join("Bungeecord.jar")), b"bungee");
}

#[tokio::test]
async fn test_spawned_plugin_download() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hangar/projects/Chunky/latestrelease"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1.4.28"))
        .mount(&server)
        .await;
    mount_jar(
        &server,
        "/hangar/projects/Chunky/versions/1.4.28/PAPER/download",
        b"chunky",
        1,
    )
    .await;

    let temp_dir = TempDir::new().unwrap();
    let downloader = Downloader::new(endpoints_for(&server));

    let chunky = downloader.spawn_plugin(
        temp_dir.path().to_path_buf(),
        "https://hangar.papermc.io/pop4959/Chunky".to_string(),
        ServerType::new("paper"),
    );
    let unsupported = downloader.spawn_plugin(
        temp_dir.path().to_path_buf(),
        "https://example.com/plugin".to_string(),
        ServerType::new("paper"),
    );

    let result = chunky.await.unwrap().unwrap();
    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(read(&temp_dir.path().join("Chunky-1.4.28.jar")), b"chunky");
    assert!(matches!(
        unsupported.await.unwrap(),
        Err(Error::UnsupportedSource(_))
    ));
}

#[test]
fn test_blocking_downloader() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(MockServer::start());
    runtime.block_on(mount_json(
        &server,
        "/v2/projects/paper/versions/1.20.6",
        json!({"builds": [148, 151]}),
    ));
    runtime.block_on(mount_jar(
        &server,
        "/v2/projects/paper/versions/1.20.6/builds/151/downloads/paper-1.20.6-151.jar",
        b"blocking paper",
        1,
    ));

    let temp_dir = TempDir::new().unwrap();
    let downloader = jarfetch::blocking::Downloader::new(endpoints_for(&server)).unwrap();

    let artifact = downloader.resolve_runtime(Flavor::Paper, "1.20.6").unwrap();
    assert_eq!(artifact.file_name, "paper.jar");

    let result = downloader.download_runtime(Flavor::Paper, temp_dir.path(), "1.20.6");
    assert!(result.is_success(), "download failed: {:?}", result.error);
    assert_eq!(read(&temp_dir.path().join("paper.jar")), b"blocking paper");

    let err = downloader
        .resolve_file_name("https://example.com/plugin", &ServerType::new("paper"))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedSource(_)));
}
