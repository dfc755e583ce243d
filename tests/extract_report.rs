// tests/extract_report.rs
//
// Extraction against a full report page, offline.
//
use babynames::{extract, ResultSequence};
use babynames::specs::popularity::{rank_rows, year_marker};

const REPORT: &str = r#"<html>
<head><title>Popularity in 1990</title></head>
<body>
<h3 align="center">Popularity in 1990</h3>
<table width="40%" border="1">
<tr><th>Rank</th><th>Male name</th><th>Female name</th></tr>
<tr align="right"><td>1</td><td>Michael</td><td>Jessica</td>
<tr align="right"><td>2</td><td>Christopher</td><td>Ashley</td>
<tr align="right"><td>3</td><td>Matthew</td><td>Brittany</td>
<tr align="right"><td>4</td><td>Joshua</td><td>Amanda</td>
<tr align="right"><td>5</td><td>Daniel</td><td>Samantha</td>
<tr align="right"><td>6</td><td>David</td><td>Sarah</td>
<tr align="right"><td>7</td><td>Andrew</td><td>Stephanie</td>
<tr align="right"><td>8</td><td>James</td><td>Jennifer</td>
<tr align="right"><td>9</td><td>Justin</td><td>Elizabeth</td>
<tr align="right"><td>10</td><td>Joseph</td><td>Lauren</td>
<tr align="right"><td>11</td><td>Jordan</td><td>Jordan</td>
<tr align="right"><td>12</td><td>Ryan</td><td>Megan</td>
<tr align="right"><td>13</td><td>Jordan</td><td>Ashley</td>
</table>
</body>
</html>"#;

#[test]
fn title_and_heading_both_count_as_year_markers() {
    // <title> and <h3> both carry the marker, so the year string doubles up.
    assert_eq!(year_marker(REPORT), "19901990");
}

#[test]
fn header_row_is_not_a_rank_row() {
    let rows = rank_rows(REPORT);
    assert_eq!(rows.len(), 13);
    assert_eq!(rows[0].rank, "1");
    assert_eq!(rows[12].name_a, "Jordan");
}

#[test]
fn full_report_extracts_sorted_first_seen_ranks() {
    let seq = extract(REPORT);
    assert_eq!(seq.year(), "19901990");
    assert_eq!(seq.entries().len(), 23);
    assert_eq!(seq.entries()[0], "Amanda 4");
    assert!(seq.entries().contains(&"Jordan 11".to_string()));
    assert!(seq.entries().contains(&"Ashley 2".to_string()));
    assert_eq!(seq.entries().last().map(String::as_str), Some("Stephanie 7"));
}

#[test]
fn single_heading_gives_plain_year() {
    let doc = REPORT.replace("<title>Popularity in 1990</title>", "<title>Baby names</title>");
    assert_eq!(extract(&doc).year(), "1990");
}

#[test]
fn text_round_trips_through_from_text() {
    let seq = extract(REPORT);
    assert_eq!(ResultSequence::from_text(&seq.to_text()), seq);
}
