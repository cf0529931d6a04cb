//! Система непересекающихся множеств (union-find) над индексами `0..len`

/// Разбиение элементов `0..len` на непересекающиеся множества.
///
/// `find` сжимает путь итеративно, поэтому глубина стека не зависит от размера сетки.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    sets: usize,
}

impl DisjointSet {
    /// Каждый элемент в своём одноэлементном множестве.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            sets: len,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Количество различных множеств.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Представитель множества `x`; все узлы пройденного пути перевешиваются на него.
    ///
    /// # Паника
    /// Если `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut path = Vec::new();
        let mut root = x;
        while self.parent[root] != root {
            path.push(root);
            root = self.parent[root];
        }
        for node in path {
            self.parent[node] = root;
        }
        root
    }

    /// Объединяет множества `a` и `b`. Возвращает `false`, если они уже были одним множеством.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        // Меньшее дерево подвешивается к большему
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.sets -= 1;
        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
