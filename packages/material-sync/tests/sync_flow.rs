//! Integration tests for the full sync flow.
//!
//! These tests drive the library the way a host adapter would:
//! 1. Build a mock editor session (selection + registry)
//! 2. Attach a Syncer (eligibility -> gate -> trigger)
//! 3. Activate the trigger and observe what reaches the sink

use std::sync::Arc;
use std::time::Duration;

use material_sync::{
    testing::MockEditor, AttrValue, AttributeBag, EntitySnapshot, GateError, MockSink,
    PipelineConfig, ReadinessConfig, SinkError, SyncConfig, Syncer,
};

/// Helper to build a material snapshot from key/value pairs.
fn material(name: &str, attrs: Vec<(&str, AttrValue)>) -> EntitySnapshot {
    let mut entity = EntitySnapshot::new("material", name);
    for (key, value) in attrs {
        entity = entity.with_attribute(key, value);
    }
    entity
}

/// Helper for a syncer with fast gate timings.
fn fast_syncer(
    editor: &MockEditor,
    sink: &MockSink,
) -> Syncer<MockEditor, MockSink> {
    let readiness = ReadinessConfig::new()
        .with_max_attempts(50)
        .with_initial_delay(Duration::from_millis(1))
        .with_max_delay(Duration::from_millis(2));

    Syncer::new(Arc::new(editor.clone()), Arc::new(sink.clone()))
        .with_config(SyncConfig::new().with_readiness(readiness))
}

/// Wait until the sink has seen at least `count` deliveries.
async fn wait_for_deliveries(sink: &MockSink, count: usize) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while sink.delivery_count() < count {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .unwrap_or_else(|_| {
        panic!(
            "expected {} deliveries, saw {}",
            count,
            sink.delivery_count()
        )
    });
}

#[tokio::test]
async fn test_resolved_reference_is_replaced_by_asset_name() {
    let editor = MockEditor::new().with_asset("tex-1", "brick.png").with_entity(material(
        "Red",
        vec![
            ("diffuseMap", AttrValue::from("tex-1")),
            ("opacity", AttrValue::from(0.5)),
        ],
    ));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    syncer.sync_once().await.join().await.unwrap();

    let batch = sink.last_delivery().unwrap();
    let expected = serde_json::json!([
        {"name": "Red", "data": {"diffuseMap": "brick.png", "opacity": 0.5}}
    ]);
    assert_eq!(serde_json::to_value(&batch).unwrap(), expected);
}

#[tokio::test]
async fn test_null_reference_passes_through_without_lookup() {
    let editor = MockEditor::new().with_asset("tex-1", "brick.png").with_entity(material(
        "Red",
        vec![
            ("diffuseMap", AttrValue::Null),
            ("opacity", AttrValue::from(0.5)),
        ],
    ));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    syncer.sync_once().await.join().await.unwrap();

    let batch = sink.last_delivery().unwrap();
    assert_eq!(batch[0].data["diffuseMap"], AttrValue::Null);
    assert!(editor.resolve_calls().is_empty());
}

#[tokio::test]
async fn test_dangling_reference_is_transmitted_as_null() {
    let editor = MockEditor::new().with_entity(material(
        "Red",
        vec![("diffuseMap", AttrValue::from("tex-missing"))],
    ));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    syncer.sync_once().await.join().await.unwrap();

    let batch = sink.last_delivery().unwrap();
    assert_eq!(batch[0].data["diffuseMap"], AttrValue::Null);
}

#[tokio::test]
async fn test_mixed_selection_keeps_only_materials() {
    let editor = MockEditor::new()
        .with_entity(material("Red", vec![]))
        .with_entity(EntitySnapshot::new("texture", "brick.png"));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    syncer.sync_once().await.join().await.unwrap();

    let batch = sink.last_delivery().unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].name, "Red");
}

#[tokio::test]
async fn test_empty_selection_still_transmits_empty_batch() {
    let editor = MockEditor::new();
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    let receipt = syncer.sync_once().await.join().await.unwrap();

    assert_eq!(receipt.records, 0);
    assert_eq!(sink.delivery_count(), 1);
    assert!(sink.last_delivery().unwrap().is_empty());
    assert_eq!(
        serde_json::to_string(&sink.last_delivery().unwrap()).unwrap(),
        "[]"
    );
}

#[tokio::test]
async fn test_batch_order_matches_selection_order() {
    let editor = MockEditor::new()
        .with_entity(material("C", vec![]))
        .with_entity(EntitySnapshot::new("script", "skipped"))
        .with_entity(material("A", vec![]))
        .with_entity(material("B", vec![]));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    syncer.sync_once().await.join().await.unwrap();

    let names: Vec<_> = sink
        .last_delivery()
        .unwrap()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[tokio::test]
async fn test_repeated_runs_produce_identical_batches() {
    let editor = MockEditor::new().with_asset("tex-1", "brick.png").with_entity(material(
        "Red",
        vec![
            ("diffuseMap", AttrValue::from("tex-1")),
            ("glossMap", AttrValue::from("tex-gone")),
            ("opacity", AttrValue::from(0.5)),
        ],
    ));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    syncer.sync_once().await.join().await.unwrap();
    syncer.sync_once().await.join().await.unwrap();

    let deliveries = sink.deliveries();
    assert_eq!(deliveries.len(), 2);
    assert_eq!(deliveries[0], deliveries[1]);
}

#[tokio::test]
async fn test_full_run_loop_syncs_once_per_activation() {
    let editor = MockEditor::new()
        .ready_after(2)
        .with_asset("tex-1", "brick.png")
        .with_entity(material(
            "Red",
            vec![("diffuseMap", AttrValue::from("tex-1"))],
        ));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    let surface = editor.clone();
    let run = tokio::spawn(async move { syncer.run(&surface).await });

    // The trigger only exists once the gate has passed.
    tokio::time::timeout(Duration::from_secs(2), async {
        while !editor.activate().await {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("trigger was never installed");
    assert!(editor.activate().await);

    wait_for_deliveries(&sink, 2).await;

    editor.remove_trigger();
    run.await.unwrap().unwrap();

    assert_eq!(editor.installed_triggers(), vec!["Sync Materials"]);
    assert!(editor.probe_count() >= 3);
    assert_eq!(sink.delivery_count(), 2);
    assert_eq!(
        sink.last_delivery().unwrap()[0].data["diffuseMap"],
        AttrValue::from("brick.png")
    );
}

#[tokio::test]
async fn test_run_refuses_ineligible_location() {
    let editor = MockEditor::new().at_location("https://playcanvas.com/dashboard");
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    let err = syncer.run(&editor).await.unwrap_err();

    assert!(matches!(err, GateError::NotEligible { .. }));
    assert_eq!(sink.delivery_count(), 0);
}

#[tokio::test]
async fn test_run_times_out_when_host_never_readies() {
    let editor = MockEditor::new().ready_after(u32::MAX);
    let sink = MockSink::new();

    let readiness = ReadinessConfig::new()
        .with_max_attempts(3)
        .with_initial_delay(Duration::from_millis(1))
        .with_max_delay(Duration::from_millis(2));
    let syncer = Syncer::new(Arc::new(editor.clone()), Arc::new(sink.clone()))
        .with_config(SyncConfig::new().with_readiness(readiness));

    let err = syncer.run(&editor).await.unwrap_err();

    assert!(matches!(err, GateError::TimedOut { attempts: 3, .. }));
    assert!(editor.installed_triggers().is_empty());
}

#[tokio::test]
async fn test_delivery_failure_is_observable_but_not_fatal() {
    let editor = MockEditor::new().with_entity(material("Red", vec![]));
    let sink = MockSink::new();
    sink.fail_with_status(500);
    let syncer = fast_syncer(&editor, &sink);

    let err = syncer.sync_once().await.join().await.unwrap_err();
    assert!(matches!(err, SinkError::Status { code: 500 }));

    // The next run is unaffected by the previous failure.
    sink.succeed();
    let receipt = syncer.sync_once().await.join().await.unwrap();
    assert_eq!(receipt.records, 1);
}

#[tokio::test]
async fn test_custom_pipeline_config_flows_through() {
    let editor = MockEditor::new()
        .with_asset("spr-1", "coin.png")
        .with_entity(
            EntitySnapshot::new("sprite", "Coin").with_attribute("atlasTex", "spr-1"),
        );
    let sink = MockSink::new();

    let pipeline = PipelineConfig::new()
        .with_target_kind("sprite")
        .with_reference_suffix("Tex");
    let syncer = Syncer::new(Arc::new(editor.clone()), Arc::new(sink.clone()))
        .with_config(SyncConfig::new().with_pipeline(pipeline));

    syncer.sync_once().await.join().await.unwrap();

    let batch = sink.last_delivery().unwrap();
    assert_eq!(batch[0].name, "Coin");
    assert_eq!(batch[0].data["atlasTex"], AttrValue::from("coin.png"));
}

#[tokio::test]
async fn test_unknown_keys_survive_verbatim() {
    let mut attrs = AttributeBag::new();
    attrs.insert("futureHostField".to_string(), AttrValue::from("kept"));
    attrs.insert("anotherOne".to_string(), AttrValue::from(7i64));

    let editor = MockEditor::new()
        .with_entity(EntitySnapshot::new("material", "Red").with_attributes(attrs.clone()));
    let sink = MockSink::new();
    let syncer = fast_syncer(&editor, &sink);

    syncer.sync_once().await.join().await.unwrap();

    assert_eq!(sink.last_delivery().unwrap()[0].data, attrs);
}
