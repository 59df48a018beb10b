//! End-to-end pipeline tests against a mock dance server.

use dancefloor_pipeline::{DancePipeline, PipelineConfig, PipelineStage};
use dancefloor_server_client::{ClientConfig, DancefloorClient};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn pipeline_for(server: &MockServer, group_capacity: u32) -> DancePipeline {
    let client = DancefloorClient::new(ClientConfig::new(server.uri())).unwrap();
    DancePipeline::new(client, PipelineConfig { group_capacity })
}

fn playlist_json(id: &str, name: &str, track_total: u32) -> Value {
    json!({"id": id, "name": name, "track_total": track_total})
}

fn item_json(track_id: &str, playlist_id: &str, playlist_name: &str) -> Value {
    json!({
        "track_id": track_id,
        "track_name": format!("Track {track_id}"),
        "track_album": "Album",
        "track_artist": "Artist",
        "playlist_id": playlist_id,
        "playlist_name": playlist_name
    })
}

fn song_json(track_id: &str, playlist_name: &str) -> Value {
    json!({
        "track_id": track_id,
        "track_name": format!("Track {track_id}"),
        "track_album": "Album",
        "track_artist": "Artist",
        "playlist_name": playlist_name
    })
}

#[tokio::test]
async fn empty_playlists_finish_early_without_further_calls() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user-playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pipeline = pipeline_for(&mock_server, 500);
    let outcome = pipeline.run().await.unwrap();

    assert!(outcome.dance_songs.is_empty());
    assert_eq!(outcome.summary.playlists, 0);
    assert_eq!(outcome.summary.groups, 0);
}

#[tokio::test]
async fn groups_are_expanded_sequentially_in_order() {
    let mock_server = MockServer::start().await;

    // Capacity 500 over [300, 300, 100] splits into [pl1] and [pl2, pl3].
    Mock::given(method("GET"))
        .and(path("/user-playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            playlist_json("pl1", "First", 300),
            playlist_json("pl2", "Second", 300),
            playlist_json("pl3", "Third", 100),
        ])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/playlist-items"))
        .and(body_json(json!([playlist_json("pl1", "First", 300)])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json("t1", "pl1", "First")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/playlist-items"))
        .and(body_json(json!([
            playlist_json("pl2", "Second", 300),
            playlist_json("pl3", "Third", 100),
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            item_json("t2", "pl2", "Second"),
            item_json("t3", "pl3", "Third"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    // The song-list body match asserts the flattened items preserve
    // group order then within-group order.
    Mock::given(method("POST"))
        .and(path("/song-list"))
        .and(body_json(json!([
            item_json("t1", "pl1", "First"),
            item_json("t2", "pl2", "Second"),
            item_json("t3", "pl3", "Third"),
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            song_json("t1", "First"),
            song_json("t2", "Second"),
            song_json("t3", "Third"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/song-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "t1", "danceability": 0.9, "energy": null, "tempo": null},
            {"id": "t2", "danceability": 0.5, "energy": null, "tempo": null},
            {"id": "t3", "danceability": 0.7, "energy": null, "tempo": null},
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dance-songs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "track_name": "Track t1",
                "track_album": "Album",
                "track_artist": "Artist",
                "playlist_name": "First",
                "danceability": 0.9
            },
            {
                "track_name": "Track t3",
                "track_album": "Album",
                "track_artist": "Artist",
                "playlist_name": "Third",
                "danceability": 0.7
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = pipeline_for(&mock_server, 500);
    let outcome = pipeline.run().await.unwrap();

    assert_eq!(outcome.dance_songs.len(), 2);
    assert_eq!(outcome.dance_songs[0].track_name, "Track t1");
    assert_eq!(outcome.dance_songs[1].playlist_name, "Third");

    assert_eq!(outcome.summary.playlists, 3);
    assert_eq!(outcome.summary.groups, 2);
    assert_eq!(outcome.summary.track_items, 3);
    assert_eq!(outcome.summary.songs, 3);
    assert_eq!(outcome.summary.dance_songs, 2);
}

#[tokio::test]
async fn playlist_fetch_failure_stops_at_first_stage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user-playlists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pipeline = pipeline_for(&mock_server, 500);
    let error = pipeline.run().await.unwrap_err();

    assert_eq!(error.stage(), PipelineStage::Playlists);
}

#[tokio::test]
async fn song_list_failure_is_tagged_and_stops_the_run() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user-playlists"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([playlist_json("pl1", "First", 10)])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/playlist-items"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json("t1", "pl1", "First")])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/song-list"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/song-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let pipeline = pipeline_for(&mock_server, 500);
    let error = pipeline.run().await.unwrap_err();

    assert_eq!(error.stage(), PipelineStage::SongList);
}

#[tokio::test]
async fn oversized_playlist_is_sent_as_its_own_group() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user-playlists"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([playlist_json("big", "Big", 600)])),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/playlist-items"))
        .and(body_json(json!([playlist_json("big", "Big", 600)])))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([item_json("t1", "big", "Big")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/song-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([song_json("t1", "Big")])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/song-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!([{"id": "t1", "danceability": 0.8, "energy": null, "tempo": null}]),
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/dance-songs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "track_name": "Track t1",
                "track_album": "Album",
                "track_artist": "Artist",
                "playlist_name": "Big",
                "danceability": 0.8
            }
        ])))
        .mount(&mock_server)
        .await;

    let pipeline = pipeline_for(&mock_server, 500);
    let outcome = pipeline.run().await.unwrap();

    assert_eq!(outcome.summary.groups, 1);
    assert_eq!(outcome.dance_songs.len(), 1);
}
