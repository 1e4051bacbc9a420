mod dashboard;
mod series;
