mod interrupt;
mod report;
mod suites;
