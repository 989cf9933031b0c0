mod compose_tests;

// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - pipeline_tests: Extraction, filtering and JSON output end to end
// - compose_tests: Composed VEVENT payloads read back through the pipeline
// - config_tests: Config file and environment resolution
