use rand::prelude::*;
use rand_distr::Normal;

use gentleboost::prelude::*;
use gentleboost::BoostError;


fn three_classes() -> Sample {
    let rows = vec![
        vec![0.0, 0.5],
        vec![0.1, 0.5],
        vec![1.0, 0.0],
        vec![1.3, 0.1],
        vec![1.1, 1.0],
        vec![1.2, 1.1],
    ];
    let features = Features::from_rows(&["f1", "f2"], &rows).unwrap();
    let labels = LabelMatrix::from_classes(&[0, 0, 1, 1, 2, 2], 3).unwrap();
    Sample::new(features, labels)
        .unwrap()
        .with_class_names(&["interphase", "mitotic", "apoptotic"])
}


fn blobs(n_per_class: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.5).unwrap();
    let centers = [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)];

    let mut rows = Vec::new();
    let mut classes = Vec::new();
    for (k, (cx, cy)) in centers.iter().enumerate() {
        for _ in 0..n_per_class {
            rows.push(vec![
                cx + noise.sample(&mut rng),
                cy + noise.sample(&mut rng),
            ]);
            classes.push(k);
        }
    }
    let features = Features::from_rows(&["Cells_X", "Cells_Y"], &rows).unwrap();
    let labels = LabelMatrix::from_classes(&classes, 3).unwrap();
    Sample::new(features, labels)
        .unwrap()
        .with_class_names(&["low", "right", "up"])
}


/// Tests for `GentleBoostClassifier`.
#[cfg(test)]
pub mod classifier_tests {
    use super::*;

    #[test]
    fn multiclass_predictions() {
        let sample = three_classes();
        let mut classifier = GentleBoostClassifier::new(Strategy::Multiclass);
        assert!(!classifier.is_trained());

        let model = classifier.train(&sample, 2).unwrap();
        assert_eq!(model.strategy(), Strategy::Multiclass);
        assert_eq!(model.models()[0].len(), 2);

        assert_eq!(
            classifier.bin_labels(),
            &["interphase", "mitotic", "apoptotic"]
        );
        let predictions = classifier.predict_all(sample.features()).unwrap();
        assert_eq!(predictions, vec![0, 0, 1, 1, 2, 2]);
        assert_eq!(
            classifier.filter_class(2, sample.features()).unwrap(),
            vec![4, 5]
        );
    }

    #[test]
    fn one_vs_all_models() {
        let sample = blobs(15, 21);
        let mut classifier = GentleBoostClassifier::new(Strategy::OneVsAll);

        let mut seen = Vec::new();
        let model = classifier
            .train_with_progress(&sample, 5, |p| seen.push(p))
            .unwrap();

        let models = model.models();
        assert_eq!(models.len(), 4);
        assert_eq!(models[0].n_class(), 3);
        assert!(models[1..].iter().all(|m| m.n_class() == 2));
        assert_eq!(model.n_class(), 3);

        assert!(!seen.is_empty());
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        assert!(seen.iter().all(|&p| p > 0.0 && p <= 1.0));

        let classes = sample.labels().classes();
        for k in 0..3 {
            let rows = classifier.filter_class(k, sample.features()).unwrap();
            let expected = (0..classes.len())
                .filter(|&i| classes[i] == k)
                .collect::<Vec<_>>();
            assert_eq!(rows, expected);
        }
    }

    #[test]
    fn show_and_parse() {
        let sample = blobs(10, 4);
        let mut classifier = GentleBoostClassifier::new(Strategy::OneVsAll);
        classifier.train(&sample, 4);
        let text = classifier.show_model().unwrap();
        assert_eq!(text.matches("\n----\n").count(), 3);
        for block in text.split("\n----\n") {
            assert!(block.lines().all(|line| line.starts_with("IF (Cells_")));
        }

        let mut other = GentleBoostClassifier::new(Strategy::OneVsAll);
        other.parse_model(&text).unwrap();
        assert_eq!(other.show_model().unwrap(), text);
        assert_eq!(
            other.predict_all(sample.features()).unwrap(),
            classifier.predict_all(sample.features()).unwrap()
        );

        // a failed parse keeps the current model
        assert!(other.parse_model("IF (x > 1, [1.0], [1.0, 2.0])").is_err());
        assert_eq!(other.show_model().unwrap(), text);
    }

    #[test]
    fn empty_model_is_not_shown() {
        let mut classifier = GentleBoostClassifier::new(Strategy::Multiclass);
        let model = classifier.parse_model("\n").unwrap();
        assert!(model.models()[0].is_empty());
        assert!(classifier.is_trained());
        assert_eq!(classifier.show_model(), None);
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        let columns = vec![vec![0.0, 1.0, 2.0, 3.0], vec![5.0; 4]];
        assert!(matches!(
            Features::from_columns(&["x", "x"], columns),
            Err(BoostError::DuplicateFeature(name)) if name == "x"
        ));
    }

    #[test]
    fn untrained_classifier() {
        let sample = three_classes();
        let classifier = GentleBoostClassifier::new(Strategy::Multiclass);
        assert!(classifier.show_model().is_none());
        assert!(matches!(
            classifier.predict_all(sample.features()),
            Err(BoostError::NotTrained)
        ));
        assert!(matches!(
            classifier.filter_class(0, sample.features()),
            Err(BoostError::NotTrained)
        ));
        assert!(matches!(
            classifier.save(Vec::new()),
            Err(BoostError::NotTrained)
        ));
    }

    #[test]
    fn unknown_class_and_feature() {
        let sample = three_classes();
        let mut classifier = GentleBoostClassifier::new(Strategy::Multiclass);
        classifier.train(&sample, 2);

        assert!(matches!(
            classifier.filter_class(3, sample.features()),
            Err(BoostError::UnknownClass { class: 3, n_class: 3 })
        ));

        let other = Features::from_rows(&["f1"], &[vec![0.0]]).unwrap();
        assert!(matches!(
            classifier.predict_all(&other),
            Err(BoostError::UnknownFeature(name)) if name == "f2"
        ));
    }

    #[test]
    fn counts_per_image() {
        let sample = three_classes();
        let mut classifier = GentleBoostClassifier::new(Strategy::Multiclass);
        classifier.train(&sample, 2);

        let images = vec!["B02", "A01", "A01", "B02", "C03", "A01"];
        let counts = classifier
            .per_group_counts(sample.features(), &images)
            .unwrap();
        assert_eq!(
            counts,
            vec![
                ("B02", vec![1, 1, 0]),
                ("A01", vec![1, 1, 1]),
                ("C03", vec![0, 0, 1]),
            ]
        );

        assert!(matches!(
            classifier.per_group_counts(sample.features(), &images[..2]),
            Err(BoostError::GroupCount { expected: 6, got: 2 })
        ));
    }

    #[test]
    fn save_and_load() {
        let sample = blobs(10, 8);
        let mut classifier = GentleBoostClassifier::new(Strategy::Multiclass);
        classifier.train(&sample, 5);

        let mut blob = Vec::new();
        classifier.save(&mut blob).unwrap();

        let mut loaded = GentleBoostClassifier::new(Strategy::Multiclass);
        loaded.load(&blob[..]).unwrap();
        assert_eq!(loaded.model(), classifier.model());
        assert_eq!(loaded.bin_labels(), &["low", "right", "up"]);

        let mut wrong = GentleBoostClassifier::new(Strategy::OneVsAll);
        assert!(matches!(
            wrong.load(&blob[..]),
            Err(BoostError::StrategyMismatch {
                expected: "one-vs-all",
                found: "multiclass",
            })
        ));
        assert!(!wrong.is_trained());

        assert!(matches!(
            loaded.load(&b"not json"[..]),
            Err(BoostError::Json(_))
        ));
        assert!(!loaded.is_trained());
    }

    #[test]
    fn xvalidate_by_image() {
        let sample = blobs(10, 2);
        let images = (0..30).map(|i| i / 3).collect::<Vec<_>>();
        let classifier = GentleBoostClassifier::new(Strategy::Multiclass);
        let misclassified = classifier
            .xvalidate(&sample, 3, 5, &images, |_| {})
            .unwrap();
        assert_eq!(misclassified.len(), 3);
        assert!(misclassified.iter().all(|&m| m <= 30));
    }
}
