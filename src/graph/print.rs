use super::WeightedDigraph;
use std::fmt;

impl fmt::Display for WeightedDigraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let order = self.order();
        for u in 0..order {
            write!(f, "[")?;
            for v in 0..order {
                match self.matrix[[u, v]] {
                    Some(w) => write!(f, "{w:8.4}")?,
                    None => write!(f, "{:>8}", "·")?,
                }
                if v != order - 1 {
                    write!(f, ", ")?;
                }
            }
            writeln!(f, "]")?;
        }
        writeln!(f, "阶数: {order}，边数: {}", self.edge_count())
    }
}
