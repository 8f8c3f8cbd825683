mod report;
mod writer;
