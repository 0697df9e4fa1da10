// Search integration tests
