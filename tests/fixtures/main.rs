mod cross_check;
mod generate;
mod report;
