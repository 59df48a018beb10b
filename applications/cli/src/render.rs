//! Plain-text table rendering for dance songs.

use dancefloor_core::DanceSong;

const HEADERS: [&str; 6] = ["#", "Track", "Album", "Artist", "Playlist", "Danceability"];

/// Render dance songs as a fixed-width text table, one row per song,
/// indexed from 1.
pub fn table(songs: &[DanceSong]) -> String {
    let rows: Vec<[String; 6]> = songs
        .iter()
        .enumerate()
        .map(|(index, song)| {
            [
                (index + 1).to_string(),
                song.track_name.clone(),
                song.track_album.clone(),
                song.track_artist.clone(),
                song.playlist_name.clone(),
                format!("{:.3}", song.danceability),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &HEADERS.map(String::from), &widths);
    render_separator(&mut out, &widths);
    for row in &rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    for (i, (cell, width)) in cells.iter().zip(widths.iter().copied()).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{cell:<width$}"));
    }
    out.push('\n');
}

fn render_separator(out: &mut String, widths: &[usize; 6]) {
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
}
