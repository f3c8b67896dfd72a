//! # Integration Tests
//!
//! End-to-end tests wiring record sources, the classifier, and the
//! aggregator through the event channel, without the CLI layer.

#[cfg(test)]
mod contract_tests {
    #[test]
    fn test_contracts_compile() {
        let _ = contracts::ConfigVersion::V1;
    }
}

#[cfg(test)]
mod e2e_tests {
    use std::io::Write;
    use std::time::Duration;

    use aggregator::{AggregatorConfig, AggregatorHandle, CounterSnapshot};
    use classifier::LexiconClassifier;
    use contracts::{Classifier, ContractError, Event, Label, RecordSource};
    use ingestion::{JsonlRecordSource, MockRecordSource};

    const TEST_TIMEOUT: Duration = Duration::from_secs(5);

    fn spawn_aggregator() -> AggregatorHandle {
        AggregatorHandle::spawn(AggregatorConfig {
            metrics_port: None,
            channel_capacity: 8,
        })
    }

    /// Drive a source through the classifier into the aggregator, then
    /// send the sentinel and collect the final counters.
    async fn drive<S: RecordSource>(
        mut source: S,
        clf: &LexiconClassifier,
        agg: AggregatorHandle,
    ) -> Result<CounterSnapshot, ContractError> {
        while let Some(record) = source.next_record().await? {
            let label = match record.trimmed_text() {
                None => Label::Neutral,
                Some(text) => clf.classify(text)?,
            };
            agg.send(Event::Label(label)).await?;
        }
        agg.send(Event::Done).await?;
        agg.wait_done(Some(TEST_TIMEOUT))
            .await
            .map_err(|e| ContractError::Other(e.to_string()))
    }

    /// End-to-end: MockRecordSource -> LexiconClassifier -> Aggregator
    ///
    /// The canonical four-record scenario: one positive, one blank
    /// (short-circuited), one negative, one neutral.
    #[tokio::test]
    async fn test_e2e_scenario_counts() {
        let source = MockRecordSource::from_texts([
            Some("I love it"),
            Some(""),
            Some("terrible"),
            Some("it exists"),
        ]);
        let clf = LexiconClassifier::with_defaults();
        let agg = spawn_aggregator();

        let snapshot = drive(source, &clf, agg).await.unwrap();

        assert_eq!(snapshot.positive, 1);
        assert_eq!(snapshot.neutral, 2);
        assert_eq!(snapshot.negative, 1);
        assert_eq!(snapshot.rows_processed, 4);
        assert_eq!(snapshot.label_total(), snapshot.rows_processed);
        assert!(snapshot.processing_seconds.unwrap() >= 0.0);
    }

    /// Conservation: rows_processed equals the record count for any run.
    #[tokio::test]
    async fn test_e2e_conservation() {
        let texts: Vec<Option<String>> = (0..250)
            .map(|i| match i % 3 {
                0 => Some("great stuff".to_string()),
                1 => Some("bad day".to_string()),
                _ => None,
            })
            .collect();
        let n = texts.len() as u64;

        let source = MockRecordSource::from_texts(texts);
        let clf = LexiconClassifier::with_defaults();
        let agg = spawn_aggregator();

        let snapshot = drive(source, &clf, agg).await.unwrap();
        assert_eq!(snapshot.rows_processed, n);
        assert_eq!(snapshot.label_total(), n);
    }

    /// Empty stream: sentinel alone still reaches the terminal state with
    /// all counters at zero.
    #[tokio::test]
    async fn test_e2e_empty_stream() {
        let source = MockRecordSource::empty();
        let clf = LexiconClassifier::with_defaults();
        let agg = spawn_aggregator();

        let snapshot = drive(source, &clf, agg).await.unwrap();
        assert_eq!(snapshot.rows_processed, 0);
        assert_eq!(snapshot.label_total(), 0);
        assert!(snapshot.processing_seconds.is_some());
    }

    /// A mid-stream source failure must not leave the aggregator blocked:
    /// the producer-side cleanup (sentinel or abort) resolves it.
    #[tokio::test]
    async fn test_e2e_no_hang_on_source_failure() {
        let mut source =
            MockRecordSource::from_texts([Some("good"), Some("bad"), Some("fine")]).fail_after(2);
        let clf = LexiconClassifier::with_defaults();
        let agg = spawn_aggregator();

        let mut streamed = 0u64;
        let err = loop {
            match source.next_record().await {
                Ok(Some(record)) => {
                    let label = match record.trimmed_text() {
                        None => Label::Neutral,
                        Some(text) => clf.classify(text).unwrap(),
                    };
                    agg.send(Event::Label(label)).await.unwrap();
                    streamed += 1;
                }
                Ok(None) => panic!("source should fail before exhaustion"),
                Err(e) => break e,
            }
        };
        assert!(matches!(err, ContractError::SourceRead { .. }));
        assert_eq!(streamed, 2);

        // Cleanup path: sentinel is still deliverable, aggregator drains
        // the k events it was sent and terminates.
        agg.send(Event::Done).await.unwrap();
        let snapshot = tokio::time::timeout(TEST_TIMEOUT, agg.wait_done(Some(TEST_TIMEOUT)))
            .await
            .expect("aggregator hung after producer failure")
            .unwrap();
        assert_eq!(snapshot.rows_processed, 2);
    }

    /// End-to-end through a real JSONL file.
    #[tokio::test]
    async fn test_e2e_jsonl_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", r#"{"text": "what a wonderful experience"}"#).unwrap();
        writeln!(file, "{}", r#"{"text": "   "}"#).unwrap();
        writeln!(file, "{}", r#"{"text": "worst purchase ever"}"#).unwrap();
        writeln!(file, "{}", r#"{}"#).unwrap();
        file.flush().unwrap();

        let source = JsonlRecordSource::open(file.path(), "text").await.unwrap();
        let clf = LexiconClassifier::with_defaults();
        let agg = spawn_aggregator();

        let snapshot = drive(source, &clf, agg).await.unwrap();
        assert_eq!(snapshot.positive, 1);
        assert_eq!(snapshot.negative, 1);
        assert_eq!(snapshot.neutral, 2);
        assert_eq!(snapshot.rows_processed, 4);
    }

    /// Back-pressure: a channel smaller than the record count still
    /// delivers everything in order, the producer simply blocks.
    #[tokio::test]
    async fn test_e2e_small_channel_backpressure() {
        let texts: Vec<Option<&str>> = (0..100).map(|_| Some("nice")).collect();
        let source = MockRecordSource::from_texts(texts);
        let clf = LexiconClassifier::with_defaults();
        let agg = AggregatorHandle::spawn(AggregatorConfig {
            metrics_port: None,
            channel_capacity: 2,
        });

        let snapshot = drive(source, &clf, agg).await.unwrap();
        assert_eq!(snapshot.rows_processed, 100);
        assert_eq!(snapshot.positive, 100);
    }

    /// Config loading feeds the same blueprint types the pipeline consumes.
    #[tokio::test]
    async fn test_e2e_config_to_aggregator() {
        let blueprint = config_loader::ConfigLoader::load_from_str(
            "[input]\npath = \"data.jsonl\"\n[channel]\ncapacity = 4",
            config_loader::ConfigFormat::Toml,
        )
        .unwrap();

        let agg = AggregatorHandle::spawn(AggregatorConfig {
            metrics_port: None,
            channel_capacity: blueprint.channel.capacity,
        });
        agg.send(Event::Done).await.unwrap();
        let snapshot = agg.wait_done(Some(TEST_TIMEOUT)).await.unwrap();
        assert_eq!(snapshot.rows_processed, 0);
    }
}
