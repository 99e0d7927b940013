use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_minilm_config_default() {
        let config = MiniLmConfig::default();
        assert_eq!(config.embedding_dim, MINILM_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, MINILM_MAX_SEQ_LEN);
        assert!(config.allow_gpu);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_minilm_config_new() {
        let config = MiniLmConfig::new("/models/all-MiniLM-L6-v2");
        assert_eq!(config.model_dir, PathBuf::from("/models/all-MiniLM-L6-v2"));
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_minilm_config_builders() {
        let config = MiniLmConfig::stub()
            .with_allow_gpu(false)
            .with_max_seq_len(128);
        assert!(!config.allow_gpu);
        assert_eq!(config.max_seq_len, 128);
        assert!(config.testing_stub);
    }

    #[test]
    fn test_minilm_config_validation_with_stub() {
        assert!(MiniLmConfig::stub().validate().is_ok());
    }

    #[test]
    fn test_minilm_config_validation_empty_path_no_stub() {
        let err = MiniLmConfig::default().validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_minilm_config_validation_zero_seq_len() {
        let err = MiniLmConfig::stub().with_max_seq_len(0).validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_minilm_config_validation_nonexistent_dir() {
        let err = MiniLmConfig::new("/nonexistent/minilm")
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_minilm_config_validation_missing_weights() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("config.json"), "{}").expect("write config");
        std::fs::write(dir.path().join("tokenizer.json"), "{}").expect("write tokenizer");

        let err = MiniLmConfig::new(dir.path()).validate().unwrap_err();
        match err {
            EmbeddingError::ModelNotFound { path } => {
                assert_eq!(path, dir.path().join("model.safetensors"));
            }
            other => panic!("expected ModelNotFound, got {other:?}"),
        }
    }
}

mod embedder_tests {
    use super::*;

    fn stub_embedder() -> MiniLmEmbedder {
        MiniLmEmbedder::load(MiniLmConfig::stub()).expect("stub should load")
    }

    #[test]
    fn test_minilm_load_stub() {
        let embedder = stub_embedder();
        assert!(embedder.is_stub());
        assert_eq!(embedder.embedding_dim(), MINILM_EMBEDDING_DIM);
        assert!(format!("{:?}", embedder).contains("Stub"));
    }

    #[test]
    fn test_minilm_load_missing_model_fails() {
        let result = MiniLmEmbedder::load(MiniLmConfig::new("/nonexistent/minilm"));
        assert!(matches!(result, Err(EmbeddingError::ModelNotFound { .. })));
    }

    #[test]
    fn test_minilm_load_bad_config_json_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        for file in ["config.json", "model.safetensors", "tokenizer.json"] {
            std::fs::write(dir.path().join(file), "not json").expect("write");
        }

        let result = MiniLmEmbedder::load(MiniLmConfig::new(dir.path()).with_allow_gpu(false));
        assert!(matches!(result, Err(EmbeddingError::InvalidConfig { .. })));
    }

    #[test]
    fn test_minilm_stub_determinism() {
        let embedder = stub_embedder();
        let a = embedder.embed_blocking("the quick brown fox").expect("embed");
        let b = embedder.embed_blocking("the quick brown fox").expect("embed");
        assert_eq!(a, b);
    }

    #[test]
    fn test_minilm_stub_uniqueness() {
        let embedder = stub_embedder();
        let a = embedder.embed_blocking("Hello").expect("embed");
        let b = embedder.embed_blocking("World").expect("embed");
        assert_ne!(a, b);
    }

    #[test]
    fn test_minilm_stub_dimension_and_norm() {
        let embedder = stub_embedder();
        for text in ["", "x", "a longer sentence with several words"] {
            let emb = embedder.embed_blocking(text).expect("embed");
            assert_eq!(emb.dim(), MINILM_EMBEDDING_DIM);
            assert!(
                (emb.norm() - 1.0).abs() < 1e-4,
                "expected unit norm, got {}",
                emb.norm()
            );
        }
    }

    #[test]
    fn test_minilm_clone_shares_backend() {
        let embedder = stub_embedder();
        let cloned = embedder.clone();
        assert_eq!(
            embedder.embed_blocking("shared").expect("embed"),
            cloned.embed_blocking("shared").expect("embed")
        );
    }

    #[tokio::test]
    async fn test_minilm_async_embed_matches_blocking() {
        let embedder = stub_embedder();
        let via_trait = EmbeddingProvider::embed(&embedder, "async path")
            .await
            .expect("embed");
        let blocking = embedder.embed_blocking("async path").expect("embed");
        assert_eq!(via_trait, blocking);
    }
}
