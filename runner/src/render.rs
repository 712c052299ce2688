use snake_engine::games::snake::{GameSnapshot, GameStatus, Point};

const HEAD: char = '@';
const BODY: char = 'o';
const FOOD: char = '*';
const EMPTY: char = '.';

pub fn render_snapshot(snapshot: &GameSnapshot) -> String {
    let size = snapshot.grid_size.max(0) as usize;
    let mut rows = vec![vec![EMPTY; size]; size];

    let mut put = |point: Point, symbol: char| {
        if (0..snapshot.grid_size).contains(&point.x) && (0..snapshot.grid_size).contains(&point.y) {
            rows[point.y as usize][point.x as usize] = symbol;
        }
    };

    if let Some(food) = snapshot.food {
        put(food, FOOD);
    }
    for (index, cell) in snapshot.snake.iter().enumerate() {
        put(*cell, if index == 0 { HEAD } else { BODY });
    }

    let status = match snapshot.status {
        GameStatus::NotStarted => "press a direction to start",
        GameStatus::Running => "running",
        GameStatus::Paused => "paused",
        GameStatus::Over => "game over",
    };

    let mut out = format!(
        "tick {} | score {} | {} | autopilot {}\n",
        snapshot.tick,
        snapshot.score,
        status,
        if snapshot.autopilot { "on" } else { "off" }
    );
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::games::snake::Direction;

    #[test]
    fn test_render_small_board() {
        let snapshot = GameSnapshot {
            grid_size: 3,
            snake: vec![Point::new(1, 1), Point::new(0, 1)],
            food: Some(Point::new(2, 0)),
            score: 2,
            status: GameStatus::Running,
            direction: Direction::Right,
            end_reason: None,
            autopilot: true,
            tick: 14,
        };
        assert_eq!(
            render_snapshot(&snapshot),
            "tick 14 | score 2 | running | autopilot on\n..*\no@.\n...\n"
        );
    }
}
