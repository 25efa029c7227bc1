#[cfg(test)]
mod tests {
    use crate::cache::ContentCache;
    use crate::include::IncludeError;
    use crate::include::fetcher::MockFetcher;
    use crate::include::local::{self, LocalInclude};
    use crate::include::remote;
    use tempfile::TempDir;

    const FRAGMENT: &str = "summary: Build the project\ncommands:\n  - cargo build\n";
    const URL: &str = "https://example.com/tasks/build.yml";

    #[tokio::test]
    async fn test_remote_resolution_without_cache() {
        let fetcher = MockFetcher::new().with_response(URL, FRAGMENT);

        let task = remote::resolve(URL, &fetcher, None).await.unwrap();

        assert_eq!(task.summary.as_deref(), Some("Build the project"));
        assert_eq!(task.commands, vec!["cargo build"]);
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_remote_resolution_populates_cache() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ContentCache::new(temp_dir.path()).unwrap();
        let fetcher = MockFetcher::new().with_response(URL, FRAGMENT);

        remote::resolve(URL, &fetcher, Some(&cache)).await.unwrap();
        assert_eq!(fetcher.calls(), 1);

        // Second resolution is served from the cache.
        let task = remote::resolve(URL, &fetcher, Some(&cache)).await.unwrap();
        assert_eq!(fetcher.calls(), 1);
        assert_eq!(task.commands, vec!["cargo build"]);
    }

    #[tokio::test]
    async fn test_cache_hit_performs_no_fetch() {
        let temp_dir = TempDir::new().unwrap();
        let cache = ContentCache::new(temp_dir.path()).unwrap();
        cache.put(URL, FRAGMENT.as_bytes()).await.unwrap();

        let fetcher = MockFetcher::new();

        let task = remote::resolve(URL, &fetcher, Some(&cache)).await.unwrap();

        assert_eq!(fetcher.calls(), 0);
        assert_eq!(task.summary.as_deref(), Some("Build the project"));
    }

    #[tokio::test]
    async fn test_remote_fetch_failure() {
        let fetcher = MockFetcher::new();

        let result = remote::resolve(URL, &fetcher, None).await;

        assert!(matches!(result, Err(IncludeError::Fetch(_))));
    }

    #[tokio::test]
    async fn test_remote_invalid_fragment() {
        let fetcher = MockFetcher::new().with_response(URL, "commands: not-a-list\n");

        let result = remote::resolve(URL, &fetcher, None).await;

        assert!(matches!(result, Err(IncludeError::Unmarshal(_))));
    }

    #[test]
    fn test_local_resolved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.yml");
        std::fs::write(&path, FRAGMENT).unwrap();

        let outcome = local::resolve(&path).unwrap();

        match outcome {
            LocalInclude::Resolved(task) => {
                assert_eq!(task.summary.as_deref(), Some("Build the project"));
            }
            LocalInclude::Unreadable(err) => panic!("expected a task, got: {}", err),
        }
    }

    #[test]
    fn test_local_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.yml");

        let outcome = local::resolve(&path).unwrap();

        assert!(matches!(outcome, LocalInclude::Unreadable(_)));
    }

    #[test]
    fn test_local_unparsable_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.yml");
        std::fs::write(&path, "commands: not-a-list\n").unwrap();

        let result = local::resolve(&path);

        assert!(matches!(result, Err(IncludeError::Unmarshal(_))));
    }
}
