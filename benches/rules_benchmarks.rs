//! Benchmarks for the rules engine hot paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::{Board, Color, Move, Session, Square};

fn all_legal_moves(session: &Session, board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square(row, col);
            if matches!(board.piece_at(sq), Some((c, _)) if c == color) {
                moves.extend(session.legal_moves(board, sq).iter().copied());
            }
        }
    }
    moves
}

/// A short opening so the middlegame benches run on a busier position.
fn opening() -> (Board, Session) {
    let mut session = Session::new();
    let mut board = Board::new();
    let line = [
        (Square(6, 4), Square(4, 4)), // e4
        (Square(1, 4), Square(3, 4)), // e5
        (Square(7, 6), Square(5, 5)), // Nf3
        (Square(0, 1), Square(2, 2)), // Nc6
        (Square(7, 5), Square(4, 2)), // Bc4
        (Square(0, 5), Square(3, 2)), // Bc5
    ];
    for (from, to) in line {
        let mv = session.legal_moves(&board, from).find_target(to).unwrap();
        board = session.execute(&board, mv);
    }
    (board, session)
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    let fresh = Session::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(all_legal_moves(&fresh, &startpos, Color::White)))
    });

    let (middlegame, session) = opening();
    group.bench_function("italian", |b| {
        b.iter(|| black_box(all_legal_moves(&session, &middlegame, Color::White)))
    });

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let startpos = Board::new();
    let fresh = Session::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(fresh.classify(&startpos, Color::White)))
    });

    let (middlegame, session) = opening();
    group.bench_function("italian", |b| {
        b.iter(|| black_box(session.classify(&middlegame, Color::White)))
    });

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let (_, session) = opening();

    c.bench_function("replay/six_plies", |b| {
        b.iter(|| black_box(chess_rules::rebuild(session.history())))
    });
}

criterion_group!(benches, bench_movegen, bench_classify, bench_replay);
criterion_main!(benches);
