//! # Solver Service
//!
//! 目標値を作る式を探索するドメインサービス
//!
//! 数値の部分集合（位置のビットマスク）ごとに、その部分集合の全数値をちょうど一度ずつ
//! 使って作れる値を列挙する。同じ値を作る式は最初に見つかった一つだけを保持するため、
//! 文字列は最終的に返す解についてのみ生成される。部分集合は要素数の少ない順に処理するので、
//! 使用する数値が少ない解が優先される。

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::domain::entities::expression::{Expr, Operator};
use crate::domain::entities::puzzle::{distance, Puzzle, Solution, MAX_NUMBERS};

const ARITHMETIC: &[Operator] = &[Operator::Add, Operator::Sub];
const WITH_SHIFTS: &[Operator] = &[Operator::Add, Operator::Sub, Operator::Shl, Operator::Shr];

/// 探索で使用する演算子の集合
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorSet {
    pub shifts: bool,
}

impl OperatorSet {
    /// `+ - << >>` の全て
    pub fn all() -> Self {
        Self { shifts: true }
    }

    /// `+ -` のみ
    pub fn arithmetic() -> Self {
        Self { shifts: false }
    }

    pub fn operators(&self) -> &'static [Operator] {
        if self.shifts {
            WITH_SHIFTS
        } else {
            ARITHMETIC
        }
    }
}

impl Default for OperatorSet {
    fn default() -> Self {
        Self::all()
    }
}

/// 式の探索サービス
#[derive(Debug, Clone, Copy, Default)]
pub struct SolverService {
    operators: OperatorSet,
}

impl SolverService {
    pub fn new(operators: OperatorSet) -> Self {
        Self { operators }
    }

    pub fn operators(&self) -> OperatorSet {
        self.operators
    }

    /// 目標値と一致する式を探す
    ///
    /// # Returns
    ///
    /// 一致する式、存在しない場合は `None`
    pub fn find_solution(&self, puzzle: &Puzzle) -> Option<Expr> {
        self.solve(puzzle)
            .filter(Solution::is_exact)
            .map(|solution| solution.expression)
    }

    /// 目標値と一致する式、なければ最も近い値を作る式を返す
    ///
    /// 距離が同じ候補が複数ある場合は最初に見つかったものを返す。
    /// 数値が空または `MAX_NUMBERS` を超える場合のみ `None` を返す
    pub fn solve(&self, puzzle: &Puzzle) -> Option<Solution> {
        let mut search = Search::new(&puzzle.numbers, self.operators.operators(), puzzle.target)?;
        search.run(true);
        let (_, node) = search.best?;
        Some(Solution::new(search.build(node), puzzle.target))
    }

    /// 作ることができる全ての値
    pub fn reachable(&self, puzzle: &Puzzle) -> BTreeSet<i32> {
        let Some(mut search) = Search::new(&puzzle.numbers, self.operators.operators(), puzzle.target)
        else {
            return BTreeSet::new();
        };
        search.run(false);
        search
            .table
            .iter()
            .flat_map(|entries| entries.iter().map(|(value, _)| *value))
            .collect()
    }
}

type NodeId = u32;

#[derive(Debug, Clone, Copy)]
enum Node {
    Leaf(i32),
    Binary {
        op: Operator,
        lhs: NodeId,
        rhs: NodeId,
    },
}

/// 一回の探索の作業領域
struct Search<'a> {
    numbers: &'a [i32],
    operators: &'static [Operator],
    target: i32,
    nodes: Vec<Node>,
    /// Indexed by subset mask: distinct values and the node that first produced each.
    table: Vec<Vec<(i32, NodeId)>>,
    best: Option<(u64, NodeId)>,
}

impl<'a> Search<'a> {
    fn new(numbers: &'a [i32], operators: &'static [Operator], target: i32) -> Option<Self> {
        if numbers.is_empty() || numbers.len() > MAX_NUMBERS {
            return None;
        }
        Some(Self {
            numbers,
            operators,
            target,
            nodes: Vec::new(),
            table: vec![Vec::new(); 1 << numbers.len()],
            best: None,
        })
    }

    fn run(&mut self, stop_on_exact: bool) {
        let full: u32 = (1 << self.numbers.len()) - 1;
        let mut masks: Vec<u32> = (1..=full).collect();
        masks.sort_by_key(|mask| mask.count_ones());

        for mask in masks {
            if self.fill(mask, stop_on_exact) {
                debug!("exact match found in subset {:#b}", mask);
                break;
            }
        }
        debug!(
            "search finished: {} distinct expressions over {} numbers",
            self.nodes.len(),
            self.numbers.len()
        );
    }

    /// Fills the table entry for `mask`. Returns true when stopping on an exact match.
    fn fill(&mut self, mask: u32, stop_on_exact: bool) -> bool {
        let mut entries: Vec<(i32, NodeId)> = Vec::new();

        if mask.count_ones() == 1 {
            let value = self.numbers[mask.trailing_zeros() as usize];
            entries.push((value, push_node(&mut self.nodes, Node::Leaf(value))));
        } else {
            let mut seen: HashSet<i32> = HashSet::new();
            // The left side always holds the lowest bit, so each unordered split is visited once.
            let low = mask & mask.wrapping_neg();
            let rest = mask ^ low;
            let mut sub = rest;
            loop {
                let left = low | sub;
                let right = mask ^ left;
                if right != 0 {
                    for &(a, a_id) in &self.table[left as usize] {
                        for &(b, b_id) in &self.table[right as usize] {
                            for &op in self.operators {
                                let candidates = [(a, a_id, b, b_id), (b, b_id, a, a_id)];
                                // addition is commutative
                                let count = if op == Operator::Add { 1 } else { 2 };
                                for &(lhs, lhs_id, rhs, rhs_id) in candidates.iter().take(count) {
                                    let value = op.apply(lhs, rhs);
                                    if !seen.insert(value) {
                                        continue;
                                    }
                                    let node = Node::Binary {
                                        op,
                                        lhs: lhs_id,
                                        rhs: rhs_id,
                                    };
                                    entries.push((value, push_node(&mut self.nodes, node)));
                                }
                            }
                        }
                    }
                }
                if sub == 0 {
                    break;
                }
                sub = (sub - 1) & rest;
            }
        }

        for &(value, node) in &entries {
            let d = distance(value, self.target);
            if self.best.map_or(true, |(best, _)| d < best) {
                self.best = Some((d, node));
                if d == 0 && stop_on_exact {
                    return true;
                }
            }
        }
        self.table[mask as usize] = entries;
        false
    }

    fn build(&self, id: NodeId) -> Expr {
        match self.nodes[id as usize] {
            Node::Leaf(value) => Expr::Number(value),
            Node::Binary { op, lhs, rhs } => Expr::binary(op, self.build(lhs), self.build(rhs)),
        }
    }
}

fn push_node(nodes: &mut Vec<Node>, node: Node) -> NodeId {
    let id = nodes.len() as NodeId;
    nodes.push(node);
    id
}
